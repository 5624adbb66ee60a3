//! Command-line interface for the media panel.
//!
//! Arguments are parsed with clap; each command is a small struct that
//! receives its dependencies up front and returns the text to print.

mod args;
mod commands;
pub mod formatting;
mod service;
mod types;


pub use args::{Cli, Commands, ConfigCommands};
pub use commands::media::find_player_by_identifier;
pub(crate) use commands::media::visibility_signals;
pub use service::CliService;
pub use types::{CliError, Command, CommandResult};
