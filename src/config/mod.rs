//! Configuration schema definitions and validation.
//!
//! Defines the configuration structure for the media panel: general
//! settings such as logging, and the polling behaviour of the panel.
//! All configurations are serializable to/from TOML format.

mod general;
mod loading;
mod panel;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use panel::{PanelConfig, PollMode};
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the media panel.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player list refresh settings.
    #[serde(default)]
    pub panel: PanelConfig,
}
