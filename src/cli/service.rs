use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::instrument;

use crate::{
    config::Config,
    services::{
        mpris::{DbusHost, HostBridge, TransportBridge},
        panel::TransportAction,
    },
};

use super::{
    CliError, Command, CommandResult, Commands, ConfigCommands,
    commands::{
        config::{SchemaCommand, ShowCommand},
        media::{ListCommand, TransportCommand, WatchCommand},
    },
};

/// High-level service executing parsed CLI commands.
///
/// Media commands share one bridge. Unless one is supplied up front, it is
/// created on first use by connecting to the D-Bus session bus, so config
/// commands work without a bus.
pub struct CliService {
    config: Config,
    bridge: OnceCell<Arc<dyn TransportBridge>>,
}

impl CliService {
    /// Creates a CLI service over the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bridge: OnceCell::new(),
        }
    }

    /// Creates a CLI service whose media commands use `bridge`.
    pub fn with_bridge(config: Config, bridge: Arc<dyn TransportBridge>) -> Self {
        Self {
            config,
            bridge: OnceCell::new_with(Some(bridge)),
        }
    }

    /// Executes a parsed command.
    ///
    /// # Errors
    /// Returns `CliError::ServiceError` if the session bus is unreachable,
    /// or whatever error the command itself produced.
    #[instrument(skip(self))]
    pub async fn execute(&self, command: Commands) -> CommandResult {
        let command: Box<dyn Command> = match command {
            Commands::Config(ConfigCommands::Show) => Box::new(ShowCommand::new(self.config.clone())),
            Commands::Config(ConfigCommands::Schema) => Box::new(SchemaCommand),
            Commands::List => Box::new(ListCommand::new(self.bridge().await?)),
            Commands::Watch => Box::new(WatchCommand::new(
                self.bridge().await?,
                self.config.panel.clone(),
            )),
            Commands::PlayPause { player } => Box::new(TransportCommand::new(
                self.bridge().await?,
                TransportAction::PlayPause,
                player,
            )),
            Commands::Next { player } => Box::new(TransportCommand::new(
                self.bridge().await?,
                TransportAction::Next,
                player,
            )),
            Commands::Previous { player } => Box::new(TransportCommand::new(
                self.bridge().await?,
                TransportAction::Previous,
                player,
            )),
        };

        command.execute().await
    }

    async fn bridge(&self) -> Result<Arc<dyn TransportBridge>, CliError> {
        self.bridge
            .get_or_try_init(|| async {
                let host = DbusHost::connect().await.map_err(|e| CliError::ServiceError {
                    service: "Media".to_string(),
                    details: format!("Failed to connect to the session bus: {e}"),
                })?;
                Ok::<_, CliError>(Arc::new(HostBridge::new(host)) as Arc<dyn TransportBridge>)
            })
            .await
            .cloned()
    }
}
