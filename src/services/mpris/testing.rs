#![allow(clippy::unwrap_used)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{Value, json};

use super::host::{HostRejection, HostRpc, methods};

/// One scripted answer to `get_player`
pub(crate) struct Reply {
    delay: Duration,
    result: Result<Value, String>,
}

impl Reply {
    pub(crate) fn ok(value: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(value),
        }
    }

    pub(crate) fn err(reason: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(reason.to_string()),
        }
    }

    pub(crate) fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Reply>,
    command_failure: Option<String>,
    command_delay: Duration,
    calls: Vec<(String, Value)>,
}

/// In-memory host that records every call and answers from a script
///
/// Player enumeration answers come off the reply queue in call order; once
/// it is empty every enumeration answers with an empty list. Commands
/// succeed with `null` unless a failure reason has been set.
#[derive(Clone, Default)]
pub(crate) struct ScriptedHost {
    script: Arc<Mutex<Script>>,
}

impl ScriptedHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, reply: Reply) -> &Self {
        self.script.lock().unwrap().replies.push_back(reply);
        self
    }

    pub(crate) fn fail_commands(&self, reason: &str) {
        self.script.lock().unwrap().command_failure = Some(reason.to_string());
    }

    pub(crate) fn delay_commands(&self, delay: Duration) {
        self.script.lock().unwrap().command_delay = delay;
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.script.lock().unwrap().calls.clone()
    }

    pub(crate) fn calls_to(&self, method: &str) -> usize {
        self.calls()
            .iter()
            .filter(|(called, _)| called == method)
            .count()
    }
}

#[async_trait]
impl HostRpc for ScriptedHost {
    async fn invoke(&self, method: &str, args: Value) -> Result<Value, HostRejection> {
        let next = {
            let mut script = self.script.lock().unwrap();
            script.calls.push((method.to_string(), args));

            if method == methods::GET_PLAYER {
                script
                    .replies
                    .pop_front()
                    .unwrap_or_else(|| Reply::ok(json!([])))
            } else {
                let reply = match &script.command_failure {
                    Some(reason) => Reply::err(reason),
                    None => Reply::ok(Value::Null),
                };
                reply.after(script.command_delay)
            }
        };

        if !next.delay.is_zero() {
            tokio::time::sleep(next.delay).await;
        }

        next.result.map_err(Into::into)
    }
}

/// Wire form of a player, with MPRIS booleans sent as integers
pub(crate) fn player_json(id: &str, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "artist": "Test Artist",
        "title": title,
        "playbackStatus": status,
        "baseProps": {
            "CanQuit": 1,
            "CanRaise": 0,
            "CanSetFullscreen": 0,
            "DesktopEntry": "test",
            "Fullscreen": 0,
            "HasTrackList": 0,
            "Identity": "Test Player"
        },
        "properties": {
            "CanControl": 1,
            "CanGoNext": 1,
            "CanGoPrevious": 0,
            "CanPause": 1,
            "CanPlay": 1,
            "CanSeek": 0,
            "LoopStatus": "None",
            "MaximumRate": 1.0,
            "Metadata": {
                "mpris:artUrl": "",
                "mpris:length": 0,
                "mpris:trackid": "/org/mpris/MediaPlayer2/Track/1",
                "xesam:album": "",
                "xesam:artist": ["Test Artist"],
                "xesam:title": title
            },
            "MinimumRate": 1.0,
            "PlaybackStatus": status,
            "Position": 0,
            "Rate": 1.0,
            "Shuffle": 0,
            "Volume": 1.0
        }
    })
}
