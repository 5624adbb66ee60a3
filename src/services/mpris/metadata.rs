use std::{collections::HashMap, time::Duration};

use serde::{Deserialize, Deserializer, Serialize};
use zbus::zvariant::{Array, ObjectPath, OwnedValue};

use super::{types::or_default, utils};

/// Metadata of the track a player currently has loaded
///
/// Field names on the wire are the MPRIS/xesam keys. Every field is
/// optional on the wire and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackMetadata {
    /// URL to album artwork image, empty when the player has none
    #[serde(rename = "mpris:artUrl", deserialize_with = "or_default::deserialize")]
    pub art_url: String,

    /// Track length in microseconds
    #[serde(rename = "mpris:length", deserialize_with = "or_default::deserialize")]
    pub length_micros: i64,

    /// MPRIS track identifier
    #[serde(rename = "mpris:trackid", deserialize_with = "or_default::deserialize")]
    pub track_id: String,

    /// Album name
    #[serde(rename = "xesam:album", deserialize_with = "or_default::deserialize")]
    pub album: String,

    /// Track artists
    #[serde(rename = "xesam:artist", deserialize_with = "artist_list")]
    pub artists: Vec<String>,

    /// Track title
    #[serde(rename = "xesam:title", deserialize_with = "or_default::deserialize")]
    pub title: String,

    /// Location of the media, used as a title when none is given
    #[serde(
        rename = "xesam:url",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "or_default::deserialize"
    )]
    pub url: String,
}

impl TrackMetadata {
    /// Artwork URL, or `None` when the player reports no artwork
    pub fn art_url(&self) -> Option<&str> {
        Some(self.art_url.as_str()).filter(|url| !url.is_empty())
    }

    /// Track duration, if the player reports one
    pub fn length(&self) -> Option<Duration> {
        (self.length_micros > 0).then(|| utils::from_mpris_micros(self.length_micros))
    }

    /// Artists joined for display, `None` when the list is empty
    pub fn artist_line(&self) -> Option<String> {
        (!self.artists.is_empty()).then(|| self.artists.join(", "))
    }

    /// Title for display, falling back to the media URL
    pub fn display_title(&self) -> Option<&str> {
        [self.title.as_str(), self.url.as_str()]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
    }
}

fn artist_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Artists {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<Artists>::deserialize(deserializer)? {
        Some(Artists::Many(artists)) => artists,
        Some(Artists::One(artist)) if !artist.is_empty() => vec![artist],
        _ => Vec::new(),
    })
}

fn string_value(value: &OwnedValue) -> Option<String> {
    String::try_from(value.clone()).ok()
}

impl From<HashMap<String, OwnedValue>> for TrackMetadata {
    fn from(metadata: HashMap<String, OwnedValue>) -> Self {
        let mut track = Self::default();

        if let Some(title) = metadata.get("xesam:title").and_then(string_value) {
            track.title = title;
        }

        if let Some(url) = metadata.get("xesam:url").and_then(string_value) {
            track.url = url;
        }

        if let Some(artist) = metadata.get("xesam:artist") {
            if let Ok(array) = <&Array>::try_from(artist) {
                track.artists = array
                    .iter()
                    .filter_map(|artist| {
                        if let Ok(s) = artist.downcast_ref::<String>() {
                            Some(s)
                        } else if let Ok(s) = artist.downcast_ref::<&str>() {
                            Some(s.to_string())
                        } else {
                            None
                        }
                    })
                    .collect();
            } else if let Some(artist) = string_value(artist) {
                track.artists = vec![artist];
            }
        }

        if let Some(album) = metadata.get("xesam:album").and_then(string_value) {
            track.album = album;
        }

        if let Some(art_url) = metadata.get("mpris:artUrl").and_then(string_value) {
            track.art_url = art_url;
        }

        if let Some(length) = metadata.get("mpris:length") {
            if let Ok(micros) = i64::try_from(length.clone()) {
                track.length_micros = micros;
            } else if let Ok(micros) = u64::try_from(length.clone()) {
                track.length_micros = i64::try_from(micros).unwrap_or(i64::MAX);
            }
        }

        if let Some(track_id) = metadata.get("mpris:trackid") {
            if let Ok(path) = track_id.downcast_ref::<ObjectPath<'_>>() {
                track.track_id = path.as_str().to_string();
            } else if let Some(id) = string_value(track_id) {
                track.track_id = id;
            }
        }

        track
    }
}
