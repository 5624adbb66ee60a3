//! media-panel - display and control MPRIS media players
//!
//! Mounts the panel against the D-Bus session bus, or runs one-shot
//! commands against it.

use std::{error::Error, process};

use clap::Parser;
use media_panel::{
    cli::{Cli, CliService, Commands, formatting::format_error},
    config::Config,
    tracing_config,
};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", format_error("Error"));
            process::exit(1);
        }
    };

    if cli.command == Commands::Watch {
        tracing_config::init_with_file(config.general.log_level)?;
        info!("Starting media panel");
    } else {
        tracing_config::init(config.general.log_level)?;
    }
    debug!(?config, "Configuration loaded");

    let service = CliService::new(config);

    match service.execute(cli.command).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {e}", format_error("Error"));
            process::exit(1);
        }
    }
}
