use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{instrument, trace};

use super::{
    MediaError, PlayerId, PlayerListSnapshot,
    host::{HostRpc, methods},
};

/// Typed operations over the host RPC primitive
///
/// One operation per host method. Implementations hold no state and never
/// retry; the panel layer depends only on this trait so it can be driven by
/// a fake in tests.
#[async_trait]
pub trait TransportBridge: Send + Sync {
    /// Fetch the current player list
    ///
    /// # Errors
    /// `MediaError::HostCallFailed` if the host rejects,
    /// `MediaError::MalformedSnapshot` if the answer is not a player list.
    async fn fetch_players(&self) -> Result<PlayerListSnapshot, MediaError>;

    /// Toggle play/pause on a player
    ///
    /// # Errors
    /// `MediaError::HostCallFailed` if the host rejects.
    async fn send_play_pause(&self, player_id: &PlayerId) -> Result<(), MediaError>;

    /// Skip a player to the next track
    ///
    /// # Errors
    /// `MediaError::HostCallFailed` if the host rejects.
    async fn send_next(&self, player_id: &PlayerId) -> Result<(), MediaError>;

    /// Send a player back to the previous track
    ///
    /// # Errors
    /// `MediaError::HostCallFailed` if the host rejects.
    async fn send_previous(&self, player_id: &PlayerId) -> Result<(), MediaError>;
}

/// [`TransportBridge`] backed by a [`HostRpc`] primitive
pub struct HostBridge<H> {
    host: H,
}

impl<H: HostRpc> HostBridge<H> {
    /// Wrap a host primitive
    pub fn new(host: H) -> Self {
        Self { host }
    }

    async fn invoke(&self, method: &str, args: Value) -> Result<Value, MediaError> {
        trace!(method, %args, "Invoking host method");
        self.host
            .invoke(method, args)
            .await
            .map_err(|source| MediaError::HostCallFailed {
                method: method.to_string(),
                source,
            })
    }

    async fn command(&self, method: &str, player_id: &PlayerId) -> Result<(), MediaError> {
        // The acknowledgement payload carries nothing we use.
        self.invoke(method, json!({ "playerId": player_id.as_str() }))
            .await
            .map(drop)
    }
}

#[async_trait]
impl<H: HostRpc> TransportBridge for HostBridge<H> {
    #[instrument(skip(self))]
    async fn fetch_players(&self) -> Result<PlayerListSnapshot, MediaError> {
        let value = self.invoke(methods::GET_PLAYER, json!({})).await?;
        PlayerListSnapshot::from_host_value(value)
    }

    #[instrument(skip_all, fields(player = %player_id))]
    async fn send_play_pause(&self, player_id: &PlayerId) -> Result<(), MediaError> {
        self.command(methods::PLAY_PAUSE, player_id).await
    }

    #[instrument(skip_all, fields(player = %player_id))]
    async fn send_next(&self, player_id: &PlayerId) -> Result<(), MediaError> {
        self.command(methods::NEXT_SONG, player_id).await
    }

    #[instrument(skip_all, fields(player = %player_id))]
    async fn send_previous(&self, player_id: &PlayerId) -> Result<(), MediaError> {
        self.command(methods::PREV_SONG, player_id).await
    }
}
