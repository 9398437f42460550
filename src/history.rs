//! Recently played albums and playlists, resolved to full detail
//!
//! The server only reports play-context URIs. Each one is classified as album
//! or playlist, all details are fetched concurrently, and the results come
//! back in input order once every fetch has settled.

use futures::future::join_all;
use thiserror::Error;

use crate::error::ApiError;
use crate::model::{Album, PlayContext, Playlist};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextKind {
    Album,
    Playlist,
}

/// A parsed `scheme:type:id` context URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextRef {
    pub kind: ContextKind,
    pub id: String,
}

impl ContextRef {
    /// Anything whose type segment is not `album` is treated as a playlist.
    pub fn parse(uri: &str) -> Result<Self, ApiError> {
        let mut parts = uri.split(':');
        let _scheme = parts.next();
        let kind = match parts.next() {
            Some("album") => ContextKind::Album,
            _ => ContextKind::Playlist,
        };
        let id = parts
            .next()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApiError::InvalidRequest(format!("context uri `{uri}` has no id")))?;
        Ok(Self { kind, id: id.to_string() })
    }
}

/// Fetches full album and playlist detail.
#[allow(async_fn_in_trait)]
pub trait ContextResolver {
    async fn album(&self, id: &str) -> Result<Album, ApiError>;
    async fn playlist(&self, id: &str) -> Result<Playlist, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum HistoryDetail {
    Album(Album),
    Playlist(Playlist),
}

impl HistoryDetail {
    pub fn kind(&self) -> ContextKind {
        match self {
            HistoryDetail::Album(_) => ContextKind::Album,
            HistoryDetail::Playlist(_) => ContextKind::Playlist,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            HistoryDetail::Album(album) => &album.name,
            HistoryDetail::Playlist(playlist) => &playlist.name,
        }
    }
}

/// One input context and what became of it.
#[derive(Debug)]
pub struct HistoryEntry {
    pub uri: String,
    pub outcome: Result<HistoryDetail, ApiError>,
}

impl HistoryEntry {
    pub fn detail(&self) -> Option<&HistoryDetail> {
        self.outcome.as_ref().ok()
    }

    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

#[derive(Debug, Error)]
#[error("history entry {index} ({uri}) failed: {source}")]
pub struct HistoryFailure {
    pub index: usize,
    pub uri: String,
    #[source]
    pub source: ApiError,
}

/// Aggregated entries, one per input context, in input order.
#[derive(Debug, Default)]
pub struct HistoryBatch {
    entries: Vec<HistoryEntry>,
}

impl HistoryBatch {
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &HistoryDetail> {
        self.entries.iter().filter_map(HistoryEntry::detail)
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_failure()).count()
    }

    /// Strict policy: every entry must have resolved, otherwise the first
    /// failure is returned.
    pub fn into_complete(self) -> Result<Vec<HistoryDetail>, HistoryFailure> {
        self.entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.outcome.map_err(|source| HistoryFailure { index, uri: entry.uri, source })
            })
            .collect()
    }
}

pub struct HistoryAggregator<'a, R> {
    resolver: &'a R,
}

impl<'a, R: ContextResolver> HistoryAggregator<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    /// Resolve every context concurrently and wait for all of them.
    ///
    /// A failed fetch stays in its position as a failure; it does not cancel
    /// or reorder the others.
    pub async fn aggregate(&self, contexts: &[PlayContext]) -> HistoryBatch {
        tracing::debug!(count = contexts.len(), "Resolving play contexts");

        let entries = join_all(contexts.iter().map(|context| self.resolve(context))).await;
        let batch = HistoryBatch { entries };

        let failures = batch.failure_count();
        if failures > 0 {
            tracing::warn!(failures, total = batch.len(), "Some play contexts could not be resolved");
        } else {
            tracing::debug!(total = batch.len(), "All play contexts resolved");
        }
        batch
    }

    async fn resolve(&self, context: &PlayContext) -> HistoryEntry {
        let outcome = match ContextRef::parse(&context.uri) {
            Ok(ContextRef { kind: ContextKind::Album, id }) => {
                self.resolver.album(&id).await.map(HistoryDetail::Album)
            }
            Ok(ContextRef { kind: ContextKind::Playlist, id }) => {
                self.resolver.playlist(&id).await.map(HistoryDetail::Playlist)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            tracing::debug!(uri = %context.uri, error = %e, "Play context failed");
        }
        HistoryEntry { uri: context.uri.clone(), outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Resolver whose playlist fetches are slow and whose id "missing" 404s.
    #[derive(Default)]
    struct SlowPlaylists {
        completed: Mutex<Vec<String>>,
    }

    impl ContextResolver for SlowPlaylists {
        async fn album(&self, id: &str) -> Result<Album, ApiError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.completed.lock().unwrap().push(id.to_string());
            if id == "missing" {
                return Err(ApiError::NotFound);
            }
            Ok(Album { id: id.to_string(), name: format!("album {id}"), ..Album::default() })
        }

        async fn playlist(&self, id: &str) -> Result<Playlist, ApiError> {
            tokio::time::sleep(Duration::from_millis(60)).await;
            self.completed.lock().unwrap().push(id.to_string());
            Ok(Playlist { id: id.to_string(), name: format!("playlist {id}"), ..Playlist::default() })
        }
    }

    fn contexts(uris: &[&str]) -> Vec<PlayContext> {
        uris.iter().map(|uri| PlayContext::new(*uri)).collect()
    }

    #[test]
    fn uri_classification() {
        assert_eq!(
            ContextRef::parse("spotify:album:42").unwrap(),
            ContextRef { kind: ContextKind::Album, id: "42".to_string() }
        );
        assert_eq!(ContextRef::parse("spotify:playlist:7").unwrap().kind, ContextKind::Playlist);
        // Only albums are recognised; every other type falls back to playlist.
        assert_eq!(ContextRef::parse("spotify:artist:7").unwrap().kind, ContextKind::Playlist);
        assert!(matches!(ContextRef::parse("spotify:album"), Err(ApiError::InvalidRequest(_))));
        assert!(matches!(ContextRef::parse(""), Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn output_follows_input_order_not_completion_order() {
        let resolver = SlowPlaylists::default();
        let batch = HistoryAggregator::new(&resolver)
            .aggregate(&contexts(&["spotify:album:a1", "spotify:playlist:p1", "spotify:album:a2"]))
            .await;

        let completed = resolver.completed.lock().unwrap().clone();
        assert_eq!(completed.last().map(String::as_str), Some("p1"));

        let kinds: Vec<_> = batch.successes().map(HistoryDetail::kind).collect();
        assert_eq!(kinds, vec![ContextKind::Album, ContextKind::Playlist, ContextKind::Album]);
        let names: Vec<_> = batch.successes().map(HistoryDetail::name).collect();
        assert_eq!(names, vec!["album a1", "playlist p1", "album a2"]);
    }

    #[tokio::test]
    async fn failures_stay_in_place() {
        let resolver = SlowPlaylists::default();
        let batch = HistoryAggregator::new(&resolver)
            .aggregate(&contexts(&["spotify:album:a1", "spotify:album:missing", "spotify:playlist:p1"]))
            .await;

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.failure_count(), 1);
        let entries = batch.entries();
        assert!(entries[0].detail().is_some());
        assert!(matches!(entries[1].outcome, Err(ApiError::NotFound)));
        assert_eq!(entries[1].uri, "spotify:album:missing");
        assert_eq!(entries[2].detail().map(HistoryDetail::kind), Some(ContextKind::Playlist));

        let failure = batch.into_complete().unwrap_err();
        assert_eq!(failure.index, 1);
        assert!(matches!(failure.source, ApiError::NotFound));
    }

    #[tokio::test]
    async fn malformed_uri_is_a_per_entry_failure() {
        let resolver = SlowPlaylists::default();
        let batch = HistoryAggregator::new(&resolver)
            .aggregate(&contexts(&["garbage", "spotify:album:a1"]))
            .await;

        assert!(matches!(batch.entries()[0].outcome, Err(ApiError::InvalidRequest(_))));
        assert!(batch.entries()[1].detail().is_some());
        assert_eq!(*resolver.completed.lock().unwrap(), vec!["a1".to_string()]);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_batch() {
        let resolver = SlowPlaylists::default();
        let batch = HistoryAggregator::new(&resolver).aggregate(&[]).await;
        assert!(batch.is_empty());
        assert_eq!(batch.into_complete().unwrap(), vec![]);
    }
}
