use std::{fmt, sync::Arc};

use tokio::task::JoinHandle;
use tracing::{Instrument, debug, debug_span, warn};

use crate::services::mpris::{MediaError, PlayerId, TransportBridge};

/// A user-initiated transport action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    /// Toggle between playing and paused
    PlayPause,
    /// Skip to the next track
    Next,
    /// Go back to the previous track
    Previous,
}

impl TransportAction {
    /// Send this action to a player and wait for the host to acknowledge it
    ///
    /// # Errors
    /// Returns the bridge's `MediaError` if the host rejects the command.
    pub async fn send(
        self,
        bridge: &dyn TransportBridge,
        player_id: &PlayerId,
    ) -> Result<(), MediaError> {
        match self {
            Self::PlayPause => bridge.send_play_pause(player_id).await,
            Self::Next => bridge.send_next(player_id).await,
            Self::Previous => bridge.send_previous(player_id).await,
        }
    }
}

impl fmt::Display for TransportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayPause => write!(f, "play-pause"),
            Self::Next => write!(f, "next"),
            Self::Previous => write!(f, "previous"),
        }
    }
}

/// Fire-and-forget front for transport commands
///
/// Commands never touch the player snapshot; the next poll shows their
/// effect.
#[derive(Clone)]
pub struct CommandDispatcher {
    bridge: Arc<dyn TransportBridge>,
}

impl CommandDispatcher {
    /// Dispatch commands through `bridge`
    pub fn new(bridge: Arc<dyn TransportBridge>) -> Self {
        Self { bridge }
    }

    /// Send `action` to `player_id` in the background.
    ///
    /// Returns as soon as the command task is spawned. A rejected command is
    /// logged and dropped; the returned handle never resolves to a panic
    /// caused by a host error and may be ignored.
    pub fn dispatch(&self, action: TransportAction, player_id: PlayerId) -> JoinHandle<()> {
        let bridge = Arc::clone(&self.bridge);
        let span = debug_span!("dispatch", %action, player = %player_id);

        tokio::spawn(
            async move {
                match action.send(bridge.as_ref(), &player_id).await {
                    Ok(()) => debug!("Transport command acknowledged"),
                    Err(e) => warn!(error = %e, "Transport command failed"),
                }
            }
            .instrument(span),
        )
    }
}
