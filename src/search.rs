//! Free-text search classification
//!
//! Words like "tracks" or "artist" in the user's input pick which entity
//! types to search and are removed from the term sent to the server.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Searchable catalog kinds, in keyword-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Track,
    Artist,
    Album,
    Playlist,
    User,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Track,
        EntityType::Artist,
        EntityType::Album,
        EntityType::Playlist,
        EntityType::User,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Track => "track",
            EntityType::Artist => "artist",
            EntityType::Album => "album",
            EntityType::Playlist => "playlist",
            EntityType::User => "user",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    pub raw_input: String,
    pub cleaned_term: String,
    /// Never empty.
    pub requested_types: BTreeSet<EntityType>,
}

impl SearchQuery {
    /// Value of the `type` query parameter, e.g. `track,album`.
    pub fn type_param(&self) -> String {
        self.requested_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_unrestricted(&self) -> bool {
        self.requested_types.len() == EntityType::ALL.len()
    }
}

/// Split raw search input into a cleaned term and the requested types.
///
/// For each keyword the plural form is tried before the singular, so that
/// "tracks" is removed whole instead of leaving a stray "s" behind. Only the
/// first occurrence is removed. Matching ignores ASCII case.
pub fn classify(raw_input: &str) -> SearchQuery {
    let mut term = raw_input.to_string();
    let mut requested_types = BTreeSet::new();

    for entity in EntityType::ALL {
        let singular = entity.as_str();
        let plural = format!("{singular}s");

        let matched = [plural.as_str(), singular]
            .into_iter()
            .find_map(|form| find_ignore_ascii_case(&term, form).map(|at| at..at + form.len()));

        if let Some(range) = matched {
            requested_types.insert(entity);
            term.replace_range(range, "");
        }
    }

    if requested_types.is_empty() {
        requested_types.extend(EntityType::ALL);
    }

    let query = SearchQuery {
        raw_input: raw_input.to_string(),
        cleaned_term: term.trim().to_string(),
        requested_types,
    };
    tracing::trace!(raw = raw_input, term = %query.cleaned_term, types = %query.type_param(), "Classified search input");
    query
}

/// ASCII lowercasing keeps byte offsets, so the index is valid in `haystack`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}
