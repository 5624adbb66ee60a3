use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    services::{mpris::TransportBridge, panel::TransportAction},
};

use super::utils::{fetch_snapshot, find_player_by_identifier};

/// Command sending one transport action to a player
///
/// Unlike the panel's dispatcher this waits for the host's answer so the
/// outcome can be reported.
pub struct TransportCommand {
    bridge: Arc<dyn TransportBridge>,
    action: TransportAction,
    player: String,
}

impl TransportCommand {
    /// Creates a command sending `action` to the player `player` resolves to
    pub fn new(bridge: Arc<dyn TransportBridge>, action: TransportAction, player: String) -> Self {
        Self {
            bridge,
            action,
            player,
        }
    }
}

#[async_trait]
impl Command for TransportCommand {
    /// Resolves the player and sends the action
    ///
    /// # Errors
    ///
    /// Returns CliError if the player cannot be resolved or the host rejects
    /// the command
    async fn execute(&self) -> CommandResult {
        let snapshot = fetch_snapshot(self.bridge.as_ref()).await?;
        let player_id = find_player_by_identifier(&snapshot, &self.player)?;
        let player_name = snapshot
            .get(&player_id)
            .map_or(player_id.as_str(), |player| player.display_name())
            .to_string();

        self.action
            .send(self.bridge.as_ref(), &player_id)
            .await
            .map_err(CliError::media)?;

        Ok(match self.action {
            TransportAction::PlayPause => format!("Toggled playback for: {player_name}"),
            TransportAction::Next => format!("Skipped to next track on: {player_name}"),
            TransportAction::Previous => format!("Went back to previous track on: {player_name}"),
        })
    }
}
