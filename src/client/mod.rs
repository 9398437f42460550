//! API client with one method per remote endpoint
//!
//! Methods are grouped by area:
//!
//! - `player`: playback control, player state, listening history
//! - `library`: saved tracks and albums
//! - `playlists`: playlist detail, following, editing
//! - `catalog`: albums, artists, browsing, search
//! - `account`: login, signup, password and profile calls
//!
//! Return types follow each endpoint's contract: sentinel calls return
//! `Result<bool, Unauthenticated>`, reads return `Result<T, ApiError>` (or
//! `Result<T, Unauthenticated>` when they have a documented fallback), account
//! calls return the raw response.

mod account;
mod catalog;
mod library;
mod player;
mod playlists;

use std::sync::Arc;

pub use account::LoginRequest;
pub use catalog::PLACEHOLDER_AD_URL;
pub use playlists::PlaylistDetails;

use crate::api::RequestDispatcher;
use crate::auth::CredentialProvider;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::history::{ContextResolver, HistoryAggregator, HistoryBatch};
use crate::model::{Album, Playlist};

#[derive(Clone, Debug)]
pub struct SpotifyClient {
    dispatcher: RequestDispatcher,
}

impl SpotifyClient {
    pub fn new(config: &ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self, ApiError> {
        Ok(Self {
            dispatcher: RequestDispatcher::new(config, credentials)?,
        })
    }

    pub fn from_dispatcher(dispatcher: RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    /// Recently played albums and playlists with full detail, in the order
    /// the server listed them. Individual failures are kept per entry.
    pub async fn recently_played_lists(&self, limit: u32) -> Result<HistoryBatch, ApiError> {
        let contexts = self.recently_played_contexts(limit).await?;
        Ok(HistoryAggregator::new(self).aggregate(&contexts).await)
    }
}

impl ContextResolver for SpotifyClient {
    async fn album(&self, id: &str) -> Result<Album, ApiError> {
        self.get_album(id).await
    }

    async fn playlist(&self, id: &str) -> Result<Playlist, ApiError> {
        self.get_playlist(id).await
    }
}

/// Comma-joined id list for `ids=` parameters.
fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}
