//! Formatting utilities for CLI output.
//!
//! Renders player views as plain lines and styles errors and headers for
//! the terminal.

use crate::services::{
    mpris::PlayerListSnapshot,
    panel::{PlayButton, PlayerView, render},
};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats one player as a numbered line.
///
/// The status column shows what the player is doing, and the trailing
/// bracket lists the controls the panel would enable.
///
/// # Examples
///
/// ```
/// use media_panel::cli::formatting::format_view;
/// use media_panel::services::{mpris::PlayerId, panel::{PlayButton, PlayerView}};
///
/// let view = PlayerView {
///     id: PlayerId::from("org.mpris.MediaPlayer2.vlc"),
///     identity: None,
///     title: "Song".to_string(),
///     artist: "Band".to_string(),
///     art: None,
///     previous_enabled: false,
///     next_enabled: true,
///     play_button: PlayButton::Play,
/// };
///
/// assert_eq!(
///     format_view(1, "VLC", &view),
///     " 1. VLC                      ⏸ Paused  - Song by Band [play, next]"
/// );
/// ```
pub fn format_view(number: usize, name: &str, view: &PlayerView) -> String {
    let status = match view.play_button {
        PlayButton::Pause => "▶ Playing",
        PlayButton::Play => "⏸ Paused",
    };

    let track = match (view.title.is_empty(), view.artist.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!(" - {}", view.title),
        (false, false) => format!(" - {} by {}", view.title, view.artist),
    };

    let mut controls = Vec::with_capacity(3);
    if view.previous_enabled {
        controls.push("previous");
    }
    controls.push(match view.play_button {
        PlayButton::Play => "play",
        PlayButton::Pause => "pause",
    });
    if view.next_enabled {
        controls.push("next");
    }

    format!(
        "{number:2}. {name:<24} {status:<9}{track} [{}]",
        controls.join(", ")
    )
}

/// Formats every player in a snapshot, numbered from 1 in host order
pub fn format_snapshot(snapshot: &PlayerListSnapshot) -> String {
    if snapshot.is_empty() {
        return "No media players found".to_string();
    }

    snapshot
        .iter()
        .zip(render(snapshot))
        .enumerate()
        .map(|(index, (player, view))| format_view(index + 1, player.display_name(), &view))
        .collect::<Vec<_>>()
        .join("\n")
}
