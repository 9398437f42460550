//! Small shared value types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Repeat mode state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatState {
    Off,
    All,
    One,
}

impl RepeatState {
    /// Wire value of the `state` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            RepeatState::Off => "false",
            RepeatState::One => "true",
            RepeatState::All => "context",
        }
    }
}

/// Kind of list a track is played from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    Album,
    Playlist,
    Artist,
}

impl ContextType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextType::Album => "album",
            ContextType::Playlist => "playlist",
            ContextType::Artist => "artist",
        }
    }

    /// `spotify:<type>:<id>`
    pub fn uri(self, id: &str) -> String {
        format!("spotify:{}:{id}", self.as_str())
    }
}

impl fmt::Display for ContextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A list the server sends either bare (`[...]`) or paged (`{"items": [...]}`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ItemList<T>(pub Vec<T>);

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> ItemList<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> std::ops::Deref for ItemList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ItemList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<T> {
            List(Vec<T>),
            Page { items: Vec<T> },
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::List(items) | Shape::Page { items } => Self(items),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_list_accepts_both_shapes() {
        let bare: ItemList<u32> = serde_json::from_str("[1, 2]").unwrap();
        let paged: ItemList<u32> = serde_json::from_str(r#"{"items": [1, 2], "total": 2}"#).unwrap();
        assert_eq!(bare, paged);
        assert!(serde_json::from_str::<ItemList<u32>>(r#"{"total": 2}"#).is_err());
    }

    #[test]
    fn context_uri_format() {
        assert_eq!(ContextType::Playlist.uri("42"), "spotify:playlist:42");
        assert_eq!(RepeatState::One.as_param(), "true");
        assert_eq!(RepeatState::Off.as_param(), "false");
    }
}
