use std::{error::Error, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

/// Opaque reason a host call was rejected with
pub type HostRejection = Box<dyn Error + Send + Sync>;

/// Method names understood by the host
pub mod methods {
    /// Enumerate the active players. Arguments: `{}`.
    pub const GET_PLAYER: &str = "get_player";
    /// Toggle playback. Arguments: `{playerId}`.
    pub const PLAY_PAUSE: &str = "playPause";
    /// Skip back one track. Arguments: `{playerId}`.
    pub const PREV_SONG: &str = "prevSong";
    /// Skip forward one track. Arguments: `{playerId}`.
    pub const NEXT_SONG: &str = "nextSong";
}

/// The single remote-call primitive supplied by the embedding host
///
/// Calls are trusted to resolve or reject eventually; no timeout is
/// applied on this side.
#[async_trait]
pub trait HostRpc: Send + Sync {
    /// Invoke a named host method with a JSON argument object
    ///
    /// # Errors
    /// Returns the host's rejection reason, untouched.
    async fn invoke(&self, method: &str, args: Value) -> Result<Value, HostRejection>;
}

#[async_trait]
impl<T: HostRpc + ?Sized> HostRpc for Arc<T> {
    async fn invoke(&self, method: &str, args: Value) -> Result<Value, HostRejection> {
        (**self).invoke(method, args).await
    }
}
