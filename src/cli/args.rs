use clap::{Parser, Subcommand};

/// Command-line arguments for `media-panel`
#[derive(Parser, Debug)]
#[command(name = "media-panel", version)]
#[command(about = "Display and control MPRIS media players")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Mount the panel and print players on every refresh.
    ///
    /// Reads `focus` / `blur` lines from stdin as host visibility signals.
    /// Ctrl-C unmounts the panel.
    Watch,

    /// List media players once
    List,

    /// Toggle play/pause on a player
    PlayPause {
        /// Player number from `list`, bus name, or a unique part of its name
        player: String,
    },

    /// Skip a player to the next track
    Next {
        /// Player number from `list`, bus name, or a unique part of its name
        player: String,
    },

    /// Send a player back to the previous track
    Previous {
        /// Player number from `list`, bus name, or a unique part of its name
        player: String,
    },

    /// Inspect the configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// `config` subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the JSON schema of the configuration file
    Schema,
}
