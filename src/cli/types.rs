use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument did not resolve to anything usable.
    ///
    /// Raised when a player identifier matches no player, or more than
    /// one.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// A service the command depends on failed.
    #[error("{service} service error: {details}")]
    ServiceError {
        /// Service that failed
        service: String,
        /// What went wrong
        details: String,
    },

    /// The configuration could not be rendered.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn media(details: impl ToString) -> Self {
        Self::ServiceError {
            service: "Media".to_string(),
            details: details.to_string(),
        }
    }

    pub(crate) fn player(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg: "player".to_string(),
            reason: reason.into(),
        }
    }
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;

/// Interface shared by every CLI command.
///
/// Commands receive their parsed arguments and dependencies through their
/// constructors, so execution takes no input.
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Runs the command and returns the text to print.
    ///
    /// # Errors
    /// Returns a `CliError` describing why the command could not complete.
    async fn execute(&self) -> CommandResult;
}
