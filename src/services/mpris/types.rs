use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Unique identifier for a media player
///
/// For players reached over D-Bus this is the player's bus name
/// (`org.mpris.MediaPlayer2.spotify`). It is the only key used to route a
/// command back to a player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from any string-like identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty and therefore unroutable
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Current playback status of a media player
///
/// Anything the host reports other than `"Playing"` (including MPRIS's
/// `"Stopped"`) is treated as paused, so a stopped player offers Play
/// rather than Pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum PlaybackStatus {
    /// Player is paused or stopped
    #[default]
    Paused,

    /// Player is currently playing
    Playing,
}

impl From<&str> for PlaybackStatus {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            _ => Self::Paused,
        }
    }
}

impl From<String> for PlaybackStatus {
    fn from(status: String) -> Self {
        Self::from(status.as_str())
    }
}

/// Loop mode for track or playlist repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum LoopStatus {
    /// No looping
    None,

    /// Loop current track
    Track,

    /// Loop entire playlist
    Playlist,

    /// Loop mode not reported by the player
    #[default]
    Unsupported,
}

impl From<&str> for LoopStatus {
    fn from(status: &str) -> Self {
        match status {
            "None" => Self::None,
            "Track" => Self::Track,
            "Playlist" => Self::Playlist,
            _ => Self::Unsupported,
        }
    }
}

impl From<String> for LoopStatus {
    fn from(status: String) -> Self {
        Self::from(status.as_str())
    }
}

bitflags! {
    /// Transport capabilities a player currently advertises.
    ///
    /// Flags gate which controls are offered; they do not guarantee the
    /// corresponding command will succeed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        /// Player accepts any control at all
        const CONTROL = 1 << 0;
        /// Can skip to the next track
        const GO_NEXT = 1 << 1;
        /// Can go back to the previous track
        const GO_PREVIOUS = 1 << 2;
        /// Can start playback
        const PLAY = 1 << 3;
        /// Can pause playback
        const PAUSE = 1 << 4;
        /// Can seek within the track
        const SEEK = 1 << 5;
    }
}

/// Serde helpers for MPRIS booleans, which hosts send as `0`/`1` or as
/// JSON booleans.
pub(crate) mod flag {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    /// `null` reads as `false`.
    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawFlag>::deserialize(deserializer)? {
            Some(RawFlag::Bool(value)) => value,
            Some(RawFlag::Int(value)) => value != 0,
            Some(RawFlag::Float(value)) => value != 0.0,
            None => false,
        })
    }
}

/// Serde helper reading an explicit `null` as the type's default.
///
/// Hosts send `null` for metadata a player does not report, and JSON
/// encoding turns non-finite floats into `null`.
pub(crate) mod or_default {
    use serde::{Deserialize, Deserializer};

    pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}
