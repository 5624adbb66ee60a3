use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult},
    config::Config,
};

/// Command printing the JSON schema of the configuration file.
pub struct SchemaCommand;

#[async_trait]
impl Command for SchemaCommand {
    /// Generates the schema from the configuration types.
    ///
    /// # Errors
    ///
    /// * `CliError::ConfigError` - If the schema cannot be serialized
    async fn execute(&self) -> CommandResult {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
