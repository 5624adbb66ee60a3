use std::sync::{Arc, Weak};

use futures::{Stream, StreamExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::{
    config::PanelConfig,
    services::mpris::{PlayerId, PlayerListSnapshot, TransportBridge},
};

use super::{
    CommandDispatcher, PlayerView, PollingController, PollingState, TransportAction, Visibility,
    render,
};

/// A mounted media panel.
///
/// Composes the polling controller and the command dispatcher over one
/// bridge. Mounting starts polling right away; unmounting or dropping the
/// panel stops it, and no poll is issued afterwards.
pub struct MediaPanel {
    controller: Arc<PollingController>,
    dispatcher: CommandDispatcher,
    visibility_task: Option<JoinHandle<()>>,
}

impl MediaPanel {
    /// Mount the panel and issue the first fetch.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip_all, fields(interval_ms = config.poll_interval_ms, mode = ?config.poll_mode))]
    pub fn mount(bridge: Arc<dyn TransportBridge>, config: &PanelConfig) -> Self {
        info!("Mounting media panel");

        let controller = Arc::new(PollingController::new(Arc::clone(&bridge), config));
        controller.resume();

        Self {
            controller,
            dispatcher: CommandDispatcher::new(bridge),
            visibility_task: None,
        }
    }

    /// Drive polling from a stream of host focus signals.
    ///
    /// Replaces any stream followed before. The task ends with the stream
    /// or with the panel.
    pub fn follow_visibility<S>(&mut self, signals: S)
    where
        S: Stream<Item = Visibility> + Send + 'static,
    {
        let controller = Arc::downgrade(&self.controller);
        let task = tokio::spawn(follow(controller, signals));

        if let Some(previous) = self.visibility_task.replace(task) {
            previous.abort();
        }
    }

    /// Feed a single focus signal
    pub fn visibility_changed(&self, visibility: Visibility) {
        self.controller.on_visibility(visibility);
    }

    /// Send a transport command without waiting for it
    pub fn dispatch(&self, action: TransportAction, player_id: PlayerId) -> JoinHandle<()> {
        self.dispatcher.dispatch(action, player_id)
    }

    /// Players currently displayed
    pub fn snapshot(&self) -> PlayerListSnapshot {
        self.controller.snapshot()
    }

    /// Watch displayed snapshots, starting with the current one
    pub fn snapshots(&self) -> impl Stream<Item = PlayerListSnapshot> + Send + 'static {
        self.controller.snapshots()
    }

    /// Controls for the players currently displayed
    pub fn views(&self) -> Vec<PlayerView> {
        render(&self.controller.snapshot())
    }

    /// Whether the panel is polling
    pub fn polling_state(&self) -> PollingState {
        self.controller.state()
    }

    /// Stop polling and release the timer and the visibility task
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(task) = self.visibility_task.take() {
            task.abort();
        }

        if self.controller.state() == PollingState::Polling {
            info!("Unmounting media panel");
        }
        self.controller.suspend();
    }
}

impl Drop for MediaPanel {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn follow<S>(controller: Weak<PollingController>, signals: S)
where
    S: Stream<Item = Visibility> + Send + 'static,
{
    let mut signals = Box::pin(signals);

    while let Some(visibility) = signals.next().await {
        let Some(controller) = controller.upgrade() else {
            break;
        };
        debug!(%visibility, "Host visibility changed");
        controller.on_visibility(visibility);
    }

    debug!("Visibility stream ended");
}
