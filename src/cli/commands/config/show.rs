use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    config::Config,
};

/// Command printing the effective configuration.
///
/// The output is the loaded file merged with defaults, rendered as TOML.
///
/// # Example Usage
///
/// ```bash
/// media-panel config show
/// ```
pub struct ShowCommand {
    config: Config,
}

impl ShowCommand {
    /// Creates a new ShowCommand for the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ShowCommand {
    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// * `CliError::ConfigError` - If the configuration cannot be serialized
    async fn execute(&self) -> CommandResult {
        toml::to_string_pretty(&self.config)
            .map(|rendered| rendered.trim_end().to_string())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
