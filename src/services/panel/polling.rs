use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use futures::Stream;
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    config::{PanelConfig, PollMode},
    services::{
        common::Property,
        mpris::{PlayerListSnapshot, TransportBridge},
    },
};

use super::Visibility;

/// Whether the controller is currently refreshing the player list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollingState {
    /// No timer is running and late results are discarded
    #[default]
    Idle,
    /// A timer is issuing fetches on the configured interval
    Polling,
}

/// Owns the refresh timer and the most recent player snapshot.
///
/// At most one timer task exists per controller. Starting a new one always
/// aborts the previous one first, and dropping the controller aborts
/// whatever is left. Fetches that were already issued when polling stops
/// are allowed to finish, but their results are dropped if the controller
/// is [`PollingState::Idle`] by the time they complete.
///
/// [`resume`](Self::resume) spawns onto the current tokio runtime and must
/// be called from within one.
pub struct PollingController {
    bridge: Arc<dyn TransportBridge>,
    interval: Duration,
    mode: PollMode,
    snapshot: Property<PlayerListSnapshot>,
    state: Property<PollingState>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl PollingController {
    /// Create an idle controller using the panel's poll settings
    pub fn new(bridge: Arc<dyn TransportBridge>, config: &PanelConfig) -> Self {
        Self::with_interval(bridge, config.poll_interval(), config.poll_mode)
    }

    /// Create an idle controller with an explicit interval and mode
    pub fn with_interval(
        bridge: Arc<dyn TransportBridge>,
        interval: Duration,
        mode: PollMode,
    ) -> Self {
        Self {
            bridge,
            interval,
            mode,
            snapshot: Property::new(PlayerListSnapshot::default()),
            state: Property::new(PollingState::Idle),
            timer: Mutex::new(None),
        }
    }

    /// Enter [`PollingState::Polling`] and start the timer.
    ///
    /// The first fetch is issued immediately. Any timer already running is
    /// aborted first.
    #[instrument(skip(self), fields(interval = ?self.interval, mode = ?self.mode))]
    pub fn resume(&self) {
        let mut timer = self.lock_timer();

        if let Some(previous) = timer.take() {
            debug!("Replacing running poll timer");
            previous.abort();
        }

        self.state.set(PollingState::Polling);

        let task = self.poll_task();
        let interval = self.interval;
        *timer = Some(match self.mode {
            PollMode::Overlapping => tokio::spawn(task.run_overlapping(interval)),
            PollMode::Sequential => tokio::spawn(task.run_sequential(interval)),
        });

        info!("Player polling resumed");
    }

    /// Enter [`PollingState::Idle`] and cancel the timer
    #[instrument(skip(self))]
    pub fn suspend(&self) {
        let mut timer = self.lock_timer();
        self.state.set(PollingState::Idle);

        if let Some(handle) = timer.take() {
            handle.abort();
            info!("Player polling suspended");
        }
    }

    /// React to a focus change of the host surface.
    ///
    /// Only edges count: focus while idle resumes and blur while polling
    /// suspends. Repeated signals are ignored.
    pub fn on_visibility(&self, visibility: Visibility) {
        match (visibility, self.state.get()) {
            (Visibility::Focused, PollingState::Idle) => self.resume(),
            (Visibility::Blurred, PollingState::Polling) => self.suspend(),
            (visibility, state) => {
                trace!(%visibility, ?state, "Ignoring visibility signal without an edge");
            }
        }
    }

    /// Current polling state
    pub fn state(&self) -> PollingState {
        self.state.get()
    }

    /// Watch the polling state
    pub fn states(&self) -> impl Stream<Item = PollingState> + Send + 'static {
        self.state.watch()
    }

    /// Most recently applied player snapshot
    pub fn snapshot(&self) -> PlayerListSnapshot {
        self.snapshot.get()
    }

    /// Watch applied snapshots, starting with the current one.
    ///
    /// Every applied fetch yields, even when the new snapshot equals the
    /// previous one.
    pub fn snapshots(&self) -> impl Stream<Item = PlayerListSnapshot> + Send + 'static {
        self.snapshot.watch()
    }

    fn poll_task(&self) -> PollTask {
        PollTask {
            bridge: Arc::clone(&self.bridge),
            snapshot: self.snapshot.clone(),
            state: self.state.clone(),
        }
    }

    fn lock_timer(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        let timer = self
            .timer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}

/// What a timer task needs to run fetches without holding the controller
#[derive(Clone)]
struct PollTask {
    bridge: Arc<dyn TransportBridge>,
    snapshot: Property<PlayerListSnapshot>,
    state: Property<PollingState>,
}

impl PollTask {
    async fn run_overlapping(self, period: Duration) {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            tokio::spawn(self.clone().poll_once());
        }
    }

    async fn run_sequential(self, period: Duration) {
        loop {
            self.clone().poll_once().await;
            time::sleep(period).await;
        }
    }

    async fn poll_once(self) {
        let result = self.bridge.fetch_players().await;

        match result {
            Ok(snapshot) if self.state.get() == PollingState::Polling => {
                debug!(players = snapshot.len(), "Applying player snapshot");
                self.snapshot.replace(snapshot);
            }
            Ok(_) => debug!("Discarding player snapshot that completed while idle"),
            Err(e) => warn!(error = %e, "Player poll failed, keeping previous snapshot"),
        }
    }
}
