//! Player state and listening history as reported by the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::Track;
use super::types::ItemList;

/// Reference to a previously played album or playlist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayContext {
    /// `scheme:type:id`
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub href: Option<String>,
}

impl PlayContext {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentlyPlayedContexts {
    #[serde(rename = "playContexts")]
    pub play_contexts: Vec<PlayContext>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: Option<DateTime<Utc>>,
    pub context: Option<PlayContext>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct RecentlyPlayedTracks {
    pub items: ItemList<PlayHistory>,
}

/// Information about a playback device
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
    pub volume_percent: Option<u8>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentlyPlaying {
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
    pub item: Option<Track>,
    pub context: Option<PlayContext>,
    pub currently_playing_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackState {
    pub device: Option<Device>,
    pub shuffle_state: bool,
    /// Raw server value; the server has sent both strings and booleans here.
    pub repeat_state: Option<serde_json::Value>,
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
    pub item: Option<Track>,
    pub context: Option<PlayContext>,
}

impl PlaybackState {
    /// Progress as a fraction of the current track, 0.0 when unknown.
    pub fn progress_ratio(&self) -> f64 {
        match (&self.item, self.progress_ms) {
            (Some(track), Some(progress)) if track.duration_ms > 0 => {
                (progress as f64 / track.duration_ms as f64).min(1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recently_played_contexts_shape() {
        let contexts: RecentlyPlayedContexts = serde_json::from_value(json!({
            "playContexts": [
                { "uri": "spotify:album:a1", "type": "album" },
                { "uri": "spotify:playlist:p1" }
            ]
        }))
        .unwrap();
        assert_eq!(contexts.play_contexts.len(), 2);
        assert_eq!(contexts.play_contexts[0].kind.as_deref(), Some("album"));
        assert_eq!(contexts.play_contexts[1], PlayContext::new("spotify:playlist:p1"));
    }

    #[test]
    fn progress_ratio_is_clamped() {
        let state = PlaybackState {
            progress_ms: Some(300_000),
            item: Some(Track { duration_ms: 200_000, ..Track::default() }),
            ..PlaybackState::default()
        };
        assert_eq!(state.progress_ratio(), 1.0);
        assert_eq!(PlaybackState::default().progress_ratio(), 0.0);
    }
}
