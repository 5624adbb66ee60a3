use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    Capabilities, LoopStatus, MediaError, PlaybackStatus, PlayerId, TrackMetadata,
    types::{flag, or_default},
};

/// Snapshot of one media player at poll time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Identifier commands for this player are routed with
    pub id: PlayerId,

    /// Artist line mirrored from the metadata
    #[serde(default, deserialize_with = "or_default::deserialize")]
    pub artist: String,

    /// Title mirrored from the metadata
    #[serde(default, deserialize_with = "or_default::deserialize")]
    pub title: String,

    /// Whether the player is playing
    pub playback_status: PlaybackStatus,

    /// Descriptor of the player application
    #[serde(
        default,
        rename = "baseProps",
        alias = "baseProperties",
        deserialize_with = "or_default::deserialize"
    )]
    pub base_properties: BaseProperties,

    /// Live transport state
    #[serde(default, deserialize_with = "or_default::deserialize")]
    pub properties: PlayerProperties,
}

impl PlayerState {
    /// Capability flags the player currently advertises
    pub fn capabilities(&self) -> Capabilities {
        self.properties.capabilities()
    }

    /// Whether the player reports it is playing
    pub fn is_playing(&self) -> bool {
        self.playback_status == PlaybackStatus::Playing
    }

    /// Artwork URL of the current track, if any
    pub fn art_url(&self) -> Option<&str> {
        self.properties.metadata.art_url()
    }

    /// Human-readable player name, falling back to the identifier
    pub fn display_name(&self) -> &str {
        if self.base_properties.identity.is_empty() {
            self.id.as_str()
        } else {
            &self.base_properties.identity
        }
    }
}

/// Properties of the `org.mpris.MediaPlayer2` interface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BaseProperties {
    /// Whether the player can be quit
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_quit: bool,

    /// Whether the player window can be raised
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_raise: bool,

    /// Whether the player can change fullscreen mode
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_set_fullscreen: bool,

    /// Desktop entry name for the player
    #[serde(deserialize_with = "or_default::deserialize")]
    pub desktop_entry: String,

    /// Whether the player is in fullscreen mode
    #[serde(deserialize_with = "flag::deserialize")]
    pub fullscreen: bool,

    /// Whether the player exposes a track list
    #[serde(deserialize_with = "flag::deserialize")]
    pub has_track_list: bool,

    /// Human-readable name of the player
    #[serde(deserialize_with = "or_default::deserialize")]
    pub identity: String,
}

/// Properties of the `org.mpris.MediaPlayer2.Player` interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerProperties {
    /// Whether the player can be controlled
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_control: bool,

    /// Whether the player can skip to next track
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_go_next: bool,

    /// Whether the player can skip to previous track
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_go_previous: bool,

    /// Whether the player can pause playback
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_pause: bool,

    /// Whether the player can start playback
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_play: bool,

    /// Whether the player supports seeking
    #[serde(deserialize_with = "flag::deserialize")]
    pub can_seek: bool,

    /// Current loop status
    #[serde(deserialize_with = "or_default::deserialize")]
    pub loop_status: LoopStatus,

    /// Maximum supported playback rate
    #[serde(deserialize_with = "or_default::deserialize")]
    pub maximum_rate: f64,

    /// Current track metadata
    #[serde(deserialize_with = "or_default::deserialize")]
    pub metadata: TrackMetadata,

    /// Minimum supported playback rate
    #[serde(deserialize_with = "or_default::deserialize")]
    pub minimum_rate: f64,

    /// Raw playback status as reported by the player
    #[serde(deserialize_with = "or_default::deserialize")]
    pub playback_status: String,

    /// Playback position in microseconds
    #[serde(deserialize_with = "or_default::deserialize")]
    pub position: i64,

    /// Current playback rate (1.0 is normal speed)
    #[serde(deserialize_with = "or_default::deserialize")]
    pub rate: f64,

    /// Whether shuffle is enabled
    #[serde(deserialize_with = "flag::deserialize")]
    pub shuffle: bool,

    /// Volume level (0.0 to 1.0)
    #[serde(deserialize_with = "or_default::deserialize")]
    pub volume: f64,
}

impl Default for PlayerProperties {
    fn default() -> Self {
        Self {
            can_control: false,
            can_go_next: false,
            can_go_previous: false,
            can_pause: false,
            can_play: false,
            can_seek: false,
            loop_status: LoopStatus::default(),
            maximum_rate: 1.0,
            metadata: TrackMetadata::default(),
            minimum_rate: 1.0,
            playback_status: String::new(),
            position: 0,
            rate: 1.0,
            shuffle: false,
            volume: 0.0,
        }
    }
}

impl PlayerProperties {
    /// Projects the boolean capability properties into a flag set
    pub fn capabilities(&self) -> Capabilities {
        [
            (self.can_control, Capabilities::CONTROL),
            (self.can_go_next, Capabilities::GO_NEXT),
            (self.can_go_previous, Capabilities::GO_PREVIOUS),
            (self.can_play, Capabilities::PLAY),
            (self.can_pause, Capabilities::PAUSE),
            (self.can_seek, Capabilities::SEEK),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .fold(Capabilities::empty(), |all, (_, capability)| all | capability)
    }
}

/// Ordered list of players produced by one poll
///
/// A snapshot is never patched: each poll replaces the previous one
/// wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlayerListSnapshot(Vec<PlayerState>);

impl PlayerListSnapshot {
    /// Builds a snapshot, checking that every id is present and unique.
    ///
    /// # Errors
    /// Returns `MediaError::MalformedSnapshot` on an empty or duplicated id.
    pub fn new(players: Vec<PlayerState>) -> Result<Self, MediaError> {
        let mut seen = HashSet::with_capacity(players.len());

        for player in &players {
            if player.id.is_empty() {
                return Err(MediaError::MalformedSnapshot(
                    "player with an empty id".to_string(),
                ));
            }

            if !seen.insert(player.id.as_str()) {
                return Err(MediaError::MalformedSnapshot(format!(
                    "duplicate player id '{}'",
                    player.id
                )));
            }
        }

        Ok(Self(players))
    }

    /// Decodes the value returned by the host's player enumeration.
    ///
    /// # Errors
    /// Returns `MediaError::MalformedSnapshot` if the value is not a list of
    /// players or fails [`PlayerListSnapshot::new`] validation.
    pub fn from_host_value(value: Value) -> Result<Self, MediaError> {
        let players: Vec<PlayerState> = serde_json::from_value(value)
            .map_err(|e| MediaError::MalformedSnapshot(e.to_string()))?;

        Self::new(players)
    }

    /// Players in host order
    pub fn players(&self) -> &[PlayerState] {
        &self.0
    }

    /// Iterate over the players in host order
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerState> {
        self.0.iter()
    }

    /// Look up a player by id
    pub fn get(&self, id: &PlayerId) -> Option<&PlayerState> {
        self.0.iter().find(|player| &player.id == id)
    }

    /// Number of players
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no player is present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlayerListSnapshot {
    type Item = &'a PlayerState;
    type IntoIter = std::slice::Iter<'a, PlayerState>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
