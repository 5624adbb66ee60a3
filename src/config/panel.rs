use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default time between two poll starts.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Player list refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    /// Milliseconds between the start of two consecutive polls.
    pub poll_interval_ms: u64,

    /// How polls are scheduled relative to each other.
    pub poll_mode: PollMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            poll_mode: PollMode::default(),
        }
    }
}

impl PanelConfig {
    /// The poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Scheduling strategy for player list refreshes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PollMode {
    /// A poll is issued every interval whether or not the previous one has
    /// completed. The last poll to complete wins.
    #[default]
    Overlapping,

    /// The next poll is issued one interval after the previous one completed.
    Sequential,
}
