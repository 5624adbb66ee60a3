use super::host::HostRejection;

/// Errors produced by the transport bridge
///
/// Neither variant is fatal: the panel recovers from both locally.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// The host RPC primitive rejected the call
    #[error("host call '{method}' failed: {source}")]
    HostCallFailed {
        /// Host method that was invoked
        method: String,
        /// Rejection reason, passed through untouched
        #[source]
        source: HostRejection,
    },

    /// The host answered with a value that is not a player list
    #[error("malformed player snapshot: {0}")]
    MalformedSnapshot(String),
}
