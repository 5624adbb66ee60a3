use std::{fs, path::Path};

use tracing::{info, instrument};

use super::{Config, ConfigPaths};
use crate::{PanelError, Result};

const DEFAULT_CONFIG_HEADER: &str = "# media-panel configuration file\n";

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or
    /// [`Config::load_from`] fails.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads and validates a configuration file.
    ///
    /// A missing file is created with a comment header, which yields the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be created or read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("Creating default configuration file");
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| PanelError::io_at(e, path))?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            PanelError::TomlParseError { details, .. } => PanelError::toml_parse(details, Some(path)),
            other => other,
        })?;

        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or a value fails validation.
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| PanelError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but cannot be used.
    ///
    /// # Errors
    /// Returns `PanelError::ConfigValidation` for an unusable value.
    pub fn validate(&self) -> Result<()> {
        if self.panel.poll_interval_ms == 0 {
            return Err(PanelError::ConfigValidation {
                component: "panel".to_string(),
                details: "poll_interval_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PanelError::io_at(e, parent))?;
    }

    fs::write(path, DEFAULT_CONFIG_HEADER).map_err(|e| PanelError::io_at(e, path))?;

    Ok(())
}
