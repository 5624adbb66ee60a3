use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use zbus::{Connection, fdo, proxy::CacheProperties};

use super::{
    BaseProperties, LoopStatus, MediaPlayer2PlayerProxy, MediaPlayer2Proxy, PlaybackStatus, PlayerId,
    PlayerProperties, PlayerState, TrackMetadata,
    host::{HostRejection, HostRpc, methods},
    proxy::MPRIS_BUS_PREFIX,
};

const UNKNOWN_ARTIST: &str = "[Unknown]";

/// Errors raised while serving host calls from the session bus
#[derive(thiserror::Error, Debug)]
pub enum DbusHostError {
    /// The method name is not one the host serves
    #[error("unknown host method '{0}'")]
    UnknownMethod(String),

    /// The argument object is missing a field or has the wrong type
    #[error("invalid arguments for '{method}': {reason}")]
    InvalidArguments {
        /// Method the arguments were sent to
        method: String,
        /// What is wrong with them
        reason: String,
    },

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),

    /// D-Bus daemon call error
    #[error("D-Bus daemon call failed: {0}")]
    Fdo(#[from] fdo::Error),

    /// The player list could not be encoded
    #[error("failed to encode player list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Host RPC primitive served from the D-Bus session bus
///
/// Lets the panel run outside an embedding application by answering the
/// host methods directly against MPRIS players.
#[derive(Clone)]
pub struct DbusHost {
    connection: Connection,
}

impl DbusHost {
    /// Connect to the session bus
    ///
    /// # Errors
    /// Returns `DbusHostError::Dbus` if the session bus is unreachable.
    #[instrument]
    pub async fn connect() -> Result<Self, DbusHostError> {
        let connection = Connection::session().await?;
        info!("Connected to D-Bus session bus");
        Ok(Self::with_connection(connection))
    }

    /// Serve host calls over an existing connection
    pub fn with_connection(connection: Connection) -> Self {
        Self { connection }
    }

    async fn call(&self, method: &str, args: &Value) -> Result<Value, DbusHostError> {
        match method {
            methods::GET_PLAYER => Ok(serde_json::to_value(self.players().await?)?),
            methods::PLAY_PAUSE => {
                let player = self.player_proxy(&player_id_arg(method, args)?).await?;
                player.play_pause().await?;
                Ok(Value::Null)
            }
            methods::NEXT_SONG => {
                let player = self.player_proxy(&player_id_arg(method, args)?).await?;
                player.next().await?;
                Ok(Value::Null)
            }
            methods::PREV_SONG => {
                let player = self.player_proxy(&player_id_arg(method, args)?).await?;
                player.previous().await?;
                Ok(Value::Null)
            }
            other => Err(DbusHostError::UnknownMethod(other.to_string())),
        }
    }

    #[instrument(skip(self))]
    async fn players(&self) -> Result<Vec<PlayerState>, DbusHostError> {
        let names = fdo::DBusProxy::new(&self.connection)
            .await?
            .list_names()
            .await?;

        let mut players = Vec::new();
        for name in names {
            if !name.as_str().starts_with(MPRIS_BUS_PREFIX) {
                continue;
            }

            let player_id = PlayerId::new(name.as_str());
            match self.read_player(&player_id).await {
                Ok(player) => players.push(player),
                Err(e) => warn!(player = %player_id, error = %e, "Skipping unreadable player"),
            }
        }

        debug!(count = players.len(), "Enumerated MPRIS players");
        Ok(players)
    }

    async fn player_proxy(
        &self,
        player_id: &PlayerId,
    ) -> Result<MediaPlayer2PlayerProxy<'static>, DbusHostError> {
        Ok(MediaPlayer2PlayerProxy::builder(&self.connection)
            .destination(player_id.as_str().to_string())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?)
    }

    async fn base_proxy(
        &self,
        player_id: &PlayerId,
    ) -> Result<MediaPlayer2Proxy<'static>, DbusHostError> {
        Ok(MediaPlayer2Proxy::builder(&self.connection)
            .destination(player_id.as_str().to_string())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?)
    }

    async fn read_player(&self, player_id: &PlayerId) -> Result<PlayerState, DbusHostError> {
        let base_proxy = self.base_proxy(player_id).await?;
        let player_proxy = self.player_proxy(player_id).await?;

        let base_properties = read_base_properties(&base_proxy).await;
        let properties = read_player_properties(&player_proxy).await;

        let title = properties
            .metadata
            .display_title()
            .unwrap_or_default()
            .to_string();
        let artist = properties
            .metadata
            .artist_line()
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Ok(PlayerState {
            id: player_id.clone(),
            artist,
            title,
            playback_status: PlaybackStatus::from(properties.playback_status.as_str()),
            base_properties,
            properties,
        })
    }
}

#[async_trait]
impl HostRpc for DbusHost {
    async fn invoke(&self, method: &str, args: Value) -> Result<Value, HostRejection> {
        self.call(method, &args).await.map_err(Into::into)
    }
}

fn player_id_arg(method: &str, args: &Value) -> Result<PlayerId, DbusHostError> {
    args.get("playerId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(PlayerId::new)
        .ok_or_else(|| DbusHostError::InvalidArguments {
            method: method.to_string(),
            reason: "expected a non-empty string 'playerId'".to_string(),
        })
}

async fn read_base_properties(proxy: &MediaPlayer2Proxy<'_>) -> BaseProperties {
    let (
        can_quit,
        can_raise,
        can_set_fullscreen,
        desktop_entry,
        fullscreen,
        has_track_list,
        identity,
    ) = futures::join!(
        proxy.can_quit(),
        proxy.can_raise(),
        proxy.can_set_fullscreen(),
        proxy.desktop_entry(),
        proxy.fullscreen(),
        proxy.has_track_list(),
        proxy.identity(),
    );

    BaseProperties {
        can_quit: can_quit.unwrap_or(false),
        can_raise: can_raise.unwrap_or(false),
        can_set_fullscreen: can_set_fullscreen.unwrap_or(false),
        desktop_entry: desktop_entry.unwrap_or_default(),
        fullscreen: fullscreen.unwrap_or(false),
        has_track_list: has_track_list.unwrap_or(false),
        identity: identity.unwrap_or_default(),
    }
}

async fn read_player_properties(proxy: &MediaPlayer2PlayerProxy<'_>) -> PlayerProperties {
    let (can_control, can_go_next, can_go_previous, can_pause, can_play, can_seek) = futures::join!(
        proxy.can_control(),
        proxy.can_go_next(),
        proxy.can_go_previous(),
        proxy.can_pause(),
        proxy.can_play(),
        proxy.can_seek(),
    );

    let (loop_status, shuffle, playback_status, metadata) = futures::join!(
        proxy.loop_status(),
        proxy.shuffle(),
        proxy.playback_status(),
        proxy.metadata(),
    );

    let (rate, minimum_rate, maximum_rate, volume, position) = futures::join!(
        proxy.rate(),
        proxy.minimum_rate(),
        proxy.maximum_rate(),
        proxy.volume(),
        proxy.position(),
    );

    let defaults = PlayerProperties::default();

    PlayerProperties {
        can_control: can_control.unwrap_or(false),
        can_go_next: can_go_next.unwrap_or(false),
        can_go_previous: can_go_previous.unwrap_or(false),
        can_pause: can_pause.unwrap_or(false),
        can_play: can_play.unwrap_or(false),
        can_seek: can_seek.unwrap_or(false),
        loop_status: loop_status
            .map(|status| LoopStatus::from(status.as_str()))
            .unwrap_or(defaults.loop_status),
        maximum_rate: maximum_rate.unwrap_or(defaults.maximum_rate),
        metadata: metadata.map(TrackMetadata::from).unwrap_or_default(),
        minimum_rate: minimum_rate.unwrap_or(defaults.minimum_rate),
        playback_status: playback_status.unwrap_or_default(),
        position: position.unwrap_or(defaults.position),
        rate: rate.unwrap_or(defaults.rate),
        shuffle: shuffle.unwrap_or(false),
        volume: volume.unwrap_or(defaults.volume),
    }
}
