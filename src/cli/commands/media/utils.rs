use crate::{
    cli::CliError,
    services::mpris::{PlayerId, PlayerListSnapshot, TransportBridge},
};

/// Fetch the current player list once
///
/// # Errors
/// Returns `CliError::ServiceError` if the host rejects or answers with
/// something that is not a player list.
pub async fn fetch_snapshot(bridge: &dyn TransportBridge) -> Result<PlayerListSnapshot, CliError> {
    bridge.fetch_players().await.map_err(CliError::media)
}

/// Finds a player by identifier
///
/// Supports, in this order:
/// - Numeric indices (1-based) as printed by `list`: "1", "2", etc.
/// - The exact player id: "org.mpris.MediaPlayer2.spotify"
/// - Case-insensitive partial matches on id or identity: "fire" matches
///   Firefox
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if no player matches, the index is
/// out of range, or more than one player matches.
pub fn find_player_by_identifier(
    players: &PlayerListSnapshot,
    identifier: &str,
) -> Result<PlayerId, CliError> {
    if players.is_empty() {
        return Err(CliError::player("No media players found"));
    }

    if let Ok(index) = identifier.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|index| players.players().get(index))
            .map(|player| player.id.clone())
            .ok_or_else(|| {
                CliError::player(format!(
                    "Invalid player index. Valid range: 1-{}",
                    players.len()
                ))
            });
    }

    if let Some(player) = players.iter().find(|player| player.id.as_str() == identifier) {
        return Ok(player.id.clone());
    }

    let identifier_lower = identifier.to_lowercase();
    let matches: Vec<_> = players
        .iter()
        .filter(|player| {
            player.id.as_str().to_lowercase().contains(&identifier_lower)
                || player
                    .base_properties
                    .identity
                    .to_lowercase()
                    .contains(&identifier_lower)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(CliError::player(format!(
            "No player found matching '{identifier}'"
        ))),
        [player] => Ok(player.id.clone()),
        _ => {
            let names: Vec<&str> = matches.iter().map(|player| player.display_name()).collect();
            Err(CliError::player(format!(
                "Multiple players match '{}': {}. Please be more specific.",
                identifier,
                names.join(", ")
            )))
        }
    }
}
