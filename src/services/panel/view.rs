use crate::services::mpris::{PlayerId, PlayerListSnapshot, PlayerState};

/// Which icon the play toggle shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButton {
    /// Player is paused, pressing starts playback
    Play,
    /// Player is playing, pressing pauses it
    Pause,
}

/// Render-ready controls for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    /// Player the controls send commands to
    pub id: PlayerId,
    /// Player name shown as a heading when several players are listed
    pub identity: Option<String>,
    /// Track title
    pub title: String,
    /// Artist line
    pub artist: String,
    /// Artwork URL, `None` renders the missing-art state
    pub art: Option<String>,
    /// Whether the previous button is enabled
    pub previous_enabled: bool,
    /// Whether the next button is enabled
    pub next_enabled: bool,
    /// Icon on the play toggle
    pub play_button: PlayButton,
}

impl From<&PlayerState> for PlayerView {
    fn from(player: &PlayerState) -> Self {
        Self {
            id: player.id.clone(),
            identity: None,
            title: player.title.clone(),
            artist: player.artist.clone(),
            art: player.art_url().map(str::to_string),
            previous_enabled: player.properties.can_go_previous,
            next_enabled: player.properties.can_go_next,
            play_button: if player.is_playing() {
                PlayButton::Pause
            } else {
                PlayButton::Play
            },
        }
    }
}

/// Project a snapshot into one view per player, in host order
///
/// Views carry the player identity only when more than one player is listed.
pub fn render(snapshot: &PlayerListSnapshot) -> Vec<PlayerView> {
    let headed = snapshot.len() > 1;

    snapshot
        .iter()
        .map(|player| PlayerView {
            identity: headed.then(|| player.display_name().to_string()),
            ..PlayerView::from(player)
        })
        .collect()
}
