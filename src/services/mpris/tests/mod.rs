//! Unit tests for the MPRIS layer
//!
//! Covers snapshot decoding from host values and the host-backed bridge.
//! Uses an in-memory host; no D-Bus connection is made.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;

use super::testing::{Reply, ScriptedHost, player_json};
use crate::services::mpris::{
    Capabilities, HostBridge, LoopStatus, MediaError, PlaybackStatus, PlayerId, PlayerListSnapshot,
    TrackMetadata, TransportBridge, methods,
};

#[test]
fn snapshot_decodes_integer_flags() {
    let value = json!([player_json("org.mpris.MediaPlayer2.vlc", "Song", "Playing")]);
    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();

    let player = &snapshot.players()[0];
    assert_eq!(player.id, PlayerId::from("org.mpris.MediaPlayer2.vlc"));
    assert_eq!(player.playback_status, PlaybackStatus::Playing);
    assert!(player.properties.can_go_next);
    assert!(!player.properties.can_go_previous);
    assert!(player.base_properties.can_quit);
    assert_eq!(player.properties.loop_status, LoopStatus::None);
    assert_eq!(player.display_name(), "Test Player");
}

#[test]
fn snapshot_accepts_boolean_flags_and_base_properties_alias() {
    let value = json!([{
        "id": "org.mpris.MediaPlayer2.mpv",
        "playbackStatus": "Paused",
        "baseProperties": { "Identity": "mpv", "CanRaise": true },
        "properties": { "CanGoPrevious": true, "CanSeek": 1.0 }
    }]);
    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();

    let player = &snapshot.players()[0];
    assert_eq!(player.base_properties.identity, "mpv");
    assert!(player.base_properties.can_raise);
    assert!(player.properties.can_go_previous);
    assert!(player.properties.can_seek);
    assert!(player.title.is_empty());
    assert_eq!(player.properties.rate, 1.0);
}

#[test]
fn snapshot_keeps_host_order() {
    let value = json!([
        player_json("b", "Second", "Paused"),
        player_json("a", "First", "Paused"),
    ]);
    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();

    let ids: Vec<&str> = snapshot.iter().map(|player| player.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert!(snapshot.get(&PlayerId::from("a")).is_some());
    assert!(snapshot.get(&PlayerId::from("c")).is_none());
}

#[test]
fn empty_list_is_a_valid_snapshot() {
    let snapshot = PlayerListSnapshot::from_host_value(json!([])).unwrap();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot, PlayerListSnapshot::default());
}

#[test]
fn non_list_value_is_malformed() {
    for value in [json!(null), json!({ "id": "x" }), json!("players"), json!(3)] {
        let result = PlayerListSnapshot::from_host_value(value);
        assert!(matches!(result, Err(MediaError::MalformedSnapshot(_))));
    }
}

#[test]
fn missing_required_fields_are_malformed() {
    let without_status = json!([{ "id": "x" }]);
    let without_id = json!([{ "playbackStatus": "Playing" }]);

    for value in [without_status, without_id] {
        let result = PlayerListSnapshot::from_host_value(value);
        assert!(matches!(result, Err(MediaError::MalformedSnapshot(_))));
    }
}

#[test]
fn empty_and_duplicate_ids_are_rejected() {
    let empty = json!([player_json("", "Song", "Playing")]);
    let duplicate = json!([
        player_json("org.mpris.MediaPlayer2.vlc", "One", "Playing"),
        player_json("org.mpris.MediaPlayer2.vlc", "Two", "Paused"),
    ]);

    let Err(MediaError::MalformedSnapshot(reason)) = PlayerListSnapshot::from_host_value(empty)
    else {
        panic!("empty id accepted");
    };
    assert!(reason.contains("empty id"));

    let Err(MediaError::MalformedSnapshot(reason)) =
        PlayerListSnapshot::from_host_value(duplicate)
    else {
        panic!("duplicate id accepted");
    };
    assert!(reason.contains("org.mpris.MediaPlayer2.vlc"));
}

#[test]
fn unknown_playback_status_reads_as_paused() {
    for status in ["Stopped", "", "buffering"] {
        let value = json!([player_json("p", "Song", status)]);
        let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();
        assert_eq!(snapshot.players()[0].playback_status, PlaybackStatus::Paused);
        assert!(!snapshot.players()[0].is_playing());
    }
}

#[test]
fn capabilities_follow_player_flags() {
    let value = json!([player_json("p", "Song", "Playing")]);
    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();

    let capabilities = snapshot.players()[0].capabilities();
    assert_eq!(
        capabilities,
        Capabilities::CONTROL | Capabilities::GO_NEXT | Capabilities::PLAY | Capabilities::PAUSE
    );
    assert!(!capabilities.contains(Capabilities::GO_PREVIOUS));
}

#[test]
fn empty_art_url_means_no_artwork() {
    let value = json!([player_json("p", "Song", "Playing")]);
    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();
    assert_eq!(snapshot.players()[0].art_url(), None);

    let metadata: TrackMetadata =
        serde_json::from_value(json!({ "mpris:artUrl": "file:///tmp/cover.png" })).unwrap();
    assert_eq!(metadata.art_url(), Some("file:///tmp/cover.png"));
}

#[test]
fn metadata_accepts_single_artist_and_reports_length() {
    let metadata: TrackMetadata = serde_json::from_value(json!({
        "xesam:artist": "Solo",
        "xesam:url": "file:///music/track.flac",
        "mpris:length": 2_500_000
    }))
    .unwrap();

    assert_eq!(metadata.artists, ["Solo"]);
    assert_eq!(metadata.artist_line().as_deref(), Some("Solo"));
    assert_eq!(metadata.display_title(), Some("file:///music/track.flac"));
    assert_eq!(metadata.length(), Some(Duration::from_millis(2500)));
    assert_eq!(TrackMetadata::default().length(), None);
}

#[tokio::test]
async fn fetch_players_calls_get_player_with_empty_args() {
    let host = ScriptedHost::new();
    host.push(Reply::ok(json!([player_json("p", "Song", "Playing")])));
    let bridge = HostBridge::new(host.clone());

    let snapshot = bridge.fetch_players().await.unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(host.calls(), vec![(methods::GET_PLAYER.to_string(), json!({}))]);
}

#[tokio::test]
async fn commands_carry_player_id() {
    let host = ScriptedHost::new();
    let bridge = HostBridge::new(host.clone());
    let id = PlayerId::from("org.mpris.MediaPlayer2.spotify");

    bridge.send_play_pause(&id).await.unwrap();
    bridge.send_next(&id).await.unwrap();
    bridge.send_previous(&id).await.unwrap();

    let args = json!({ "playerId": "org.mpris.MediaPlayer2.spotify" });
    assert_eq!(
        host.calls(),
        vec![
            (methods::PLAY_PAUSE.to_string(), args.clone()),
            (methods::NEXT_SONG.to_string(), args.clone()),
            (methods::PREV_SONG.to_string(), args),
        ]
    );
}

#[tokio::test]
async fn host_rejection_becomes_host_call_failed() {
    let host = ScriptedHost::new();
    host.push(Reply::err("bus unavailable"));
    host.fail_commands("no such player");
    let bridge = HostBridge::new(host);

    let Err(MediaError::HostCallFailed { method, source }) = bridge.fetch_players().await else {
        panic!("rejection not surfaced");
    };
    assert_eq!(method, "get_player");
    assert_eq!(source.to_string(), "bus unavailable");

    let result = bridge.send_next(&PlayerId::from("p")).await;
    assert!(matches!(
        result,
        Err(MediaError::HostCallFailed { ref method, .. }) if method == "nextSong"
    ));
}

#[tokio::test]
async fn malformed_host_answer_surfaces_from_fetch() {
    let host = ScriptedHost::new();
    host.push(Reply::ok(json!({ "players": [] })));
    let bridge = HostBridge::new(host);

    let result = bridge.fetch_players().await;
    assert!(matches!(result, Err(MediaError::MalformedSnapshot(_))));
}

#[test]
fn null_fields_read_as_defaults() {
    let value = json!([
        player_json("org.mpris.MediaPlayer2.vlc", "Song", "Playing"),
        {
            "id": "org.mpris.MediaPlayer2.idle",
            "playbackStatus": "Stopped",
            "title": null,
            "artist": null,
            "baseProps": { "Identity": null, "CanQuit": null },
            "properties": {
                "LoopStatus": null,
                "Volume": null,
                "Rate": null,
                "Metadata": { "xesam:title": null, "mpris:artUrl": null, "mpris:length": null }
            }
        }
    ]);

    let snapshot = PlayerListSnapshot::from_host_value(value).unwrap();
    assert_eq!(snapshot.len(), 2);

    let idle = &snapshot.players()[1];
    assert!(idle.title.is_empty());
    assert!(idle.artist.is_empty());
    assert!(!idle.base_properties.can_quit);
    assert_eq!(idle.display_name(), "org.mpris.MediaPlayer2.idle");
    assert_eq!(idle.properties.loop_status, LoopStatus::Unsupported);
    assert_eq!(idle.properties.volume, 0.0);
    assert_eq!(idle.art_url(), None);
    assert_eq!(idle.properties.metadata.length(), None);
}

#[test]
fn non_finite_numbers_survive_a_json_round_trip() {
    let mut players: Vec<super::PlayerState> =
        serde_json::from_value(json!([player_json("p", "Song", "Playing")])).unwrap();
    players[0].properties.volume = f64::NAN;
    players[0].properties.rate = f64::INFINITY;

    let encoded = serde_json::to_value(&players).unwrap();
    let snapshot = PlayerListSnapshot::from_host_value(encoded).unwrap();

    assert_eq!(snapshot.players()[0].properties.volume, 0.0);
    assert_eq!(snapshot.players()[0].title, "Song");
}
