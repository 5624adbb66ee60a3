use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_snapshot},
    services::mpris::TransportBridge,
};

use super::utils::fetch_snapshot;

/// Command to list all available media players
///
/// Shows player number, name, playback state, track and enabled controls.
pub struct ListCommand {
    bridge: Arc<dyn TransportBridge>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(bridge: Arc<dyn TransportBridge>) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl Command for ListCommand {
    /// Fetches the player list once and formats it
    ///
    /// # Errors
    ///
    /// Returns CliError if the host cannot enumerate players
    async fn execute(&self) -> CommandResult {
        let snapshot = fetch_snapshot(self.bridge.as_ref()).await?;

        if snapshot.is_empty() {
            return Ok(format_snapshot(&snapshot));
        }

        let mut output = format!("Found {} media player(s):\n\n", snapshot.len());
        output.push_str(&format_snapshot(&snapshot));
        output.push_str("\n\nUse player number or partial name with other commands.");
        Ok(output)
    }
}
