use std::{
    io::{self, BufRead, BufReader},
    sync::Arc,
    thread,
};

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, info, warn};

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_description, format_header, format_snapshot},
    },
    config::PanelConfig,
    services::{
        mpris::TransportBridge,
        panel::{MediaPanel, Visibility},
    },
};

/// Command mounting the panel until interrupted
///
/// Prints the player list on every applied poll. Lines on stdin are read
/// as host focus signals.
pub struct WatchCommand {
    bridge: Arc<dyn TransportBridge>,
    config: PanelConfig,
}

impl WatchCommand {
    /// Creates a new WatchCommand
    pub fn new(bridge: Arc<dyn TransportBridge>, config: PanelConfig) -> Self {
        Self { bridge, config }
    }
}

#[async_trait]
impl Command for WatchCommand {
    /// Mounts the panel and prints snapshots until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns CliError if the interrupt handler cannot be installed
    async fn execute(&self) -> CommandResult {
        let mut panel = MediaPanel::mount(Arc::clone(&self.bridge), &self.config);
        panel.follow_visibility(visibility_signals(BufReader::new(io::stdin())));

        println!(
            "{}",
            format_description("Type 'blur' or 'focus' to simulate the host window. Ctrl-C exits.")
        );

        let mut snapshots = Box::pin(panel.snapshots().skip(1));
        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        loop {
            tokio::select! {
                result = &mut interrupt => {
                    result.map_err(CliError::IoError)?;
                    break;
                }
                next = snapshots.next() => match next {
                    Some(snapshot) => {
                        println!("{}", format_header("Media players"));
                        println!("{}", format_snapshot(&snapshot));
                    }
                    None => break,
                },
            }
        }

        panel.unmount();
        info!("Watch interrupted");
        Ok("Media panel unmounted".to_string())
    }
}

/// Reads host focus signals line by line from `reader`
///
/// Reading happens on a detached thread so a pending read never holds up
/// runtime shutdown. Blank lines are skipped and unknown words are logged.
/// The stream ends at end of input or on the first read error.
pub(crate) fn visibility_signals<R>(reader: R) -> impl Stream<Item = Visibility> + Send + 'static
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "Stopped reading visibility signals");
                    return;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Visibility>() {
                Ok(visibility) => {
                    if tx.send(visibility).is_err() {
                        return;
                    }
                }
                Err(e) => warn!(error = %e, "Ignoring input line"),
            }
        }
        debug!("Visibility input closed");
    });

    UnboundedReceiverStream::new(rx)
}
