#![allow(missing_docs)]

use std::collections::HashMap;

use zbus::{Result, proxy, zvariant::OwnedValue};

/// Bus name prefix every MPRIS player registers under
pub const MPRIS_BUS_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Root `org.mpris.MediaPlayer2` interface.
///
/// Only the descriptor properties copied into `BaseProperties` are
/// declared.
#[proxy(
    interface = "org.mpris.MediaPlayer2",
    default_service = "org.mpris.MediaPlayer2",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MediaPlayer2 {
    #[zbus(property)]
    fn can_quit(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_raise(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_set_fullscreen(&self) -> Result<bool>;

    /// Basename of the player's `.desktop` file
    #[zbus(property)]
    fn desktop_entry(&self) -> Result<String>;

    #[zbus(property)]
    fn fullscreen(&self) -> Result<bool>;

    #[zbus(property)]
    fn has_track_list(&self) -> Result<bool>;

    /// Friendly name such as "VLC media player"
    #[zbus(property)]
    fn identity(&self) -> Result<String>;
}

/// `org.mpris.MediaPlayer2.Player` interface.
///
/// The three transport methods the host serves, plus every property
/// copied into `PlayerProperties`.
#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_service = "org.mpris.MediaPlayer2",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MediaPlayer2Player {
    fn play_pause(&self) -> Result<()>;

    fn next(&self) -> Result<()>;

    fn previous(&self) -> Result<()>;

    /// "Playing", "Paused" or "Stopped"
    #[zbus(property)]
    fn playback_status(&self) -> Result<String>;

    /// "None", "Track" or "Playlist"; optional in MPRIS
    #[zbus(property)]
    fn loop_status(&self) -> Result<String>;

    #[zbus(property)]
    fn rate(&self) -> Result<f64>;

    #[zbus(property)]
    fn shuffle(&self) -> Result<bool>;

    /// `a{sv}` keyed by `mpris:` and `xesam:` names
    #[zbus(property)]
    fn metadata(&self) -> Result<HashMap<String, OwnedValue>>;

    #[zbus(property)]
    fn volume(&self) -> Result<f64>;

    /// Microseconds into the current track
    #[zbus(property)]
    fn position(&self) -> Result<i64>;

    #[zbus(property)]
    fn minimum_rate(&self) -> Result<f64>;

    #[zbus(property)]
    fn maximum_rate(&self) -> Result<f64>;

    #[zbus(property)]
    fn can_go_next(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_go_previous(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_play(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_pause(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_seek(&self) -> Result<bool>;

    #[zbus(property)]
    fn can_control(&self) -> Result<bool>;
}
