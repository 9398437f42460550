//! Saved tracks and albums

use super::{join_ids, SpotifyClient};
use crate::api::{endpoints, Request};
use crate::error::{ApiError, Unauthenticated};
use crate::model::{ItemList, SavedAlbum, SavedTrack};

impl SpotifyClient {
    pub async fn save_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: save_tracks");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::SAVE_TRACKS).query("ids", join_ids(ids)))
            .await
    }

    pub async fn remove_tracks<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: remove_tracks");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::REMOVE_TRACKS).query("ids", join_ids(ids)))
            .await
    }

    /// Whether the track is in the user's liked songs; `false` when unknown.
    pub async fn is_track_saved(&self, id: &str) -> Result<bool, Unauthenticated> {
        let flags: Vec<bool> = self
            .dispatcher
            .execute_or(Request::new(&endpoints::CONTAINS_TRACKS).query("ids", id), Vec::new())
            .await?;
        Ok(flags.first().copied().unwrap_or(false))
    }

    /// Liked songs; empty when the listing cannot be fetched.
    pub async fn saved_tracks(&self) -> Result<Vec<SavedTrack>, Unauthenticated> {
        let tracks: ItemList<SavedTrack> = self
            .dispatcher
            .execute_or(Request::new(&endpoints::SAVED_TRACKS), ItemList::default())
            .await?;
        Ok(tracks.into_vec())
    }

    pub async fn save_albums<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: save_albums");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::SAVE_ALBUMS).query("ids", join_ids(ids)))
            .await
    }

    pub async fn remove_albums<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: remove_albums");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::REMOVE_ALBUMS).query("ids", join_ids(ids)))
            .await
    }

    /// Whether the album is saved; `false` when unknown.
    pub async fn is_album_saved(&self, id: &str) -> Result<bool, Unauthenticated> {
        let flags: Vec<bool> = self
            .dispatcher
            .execute_or(Request::new(&endpoints::CONTAINS_ALBUMS).query("ids", id), Vec::new())
            .await?;
        Ok(flags.first().copied().unwrap_or(false))
    }

    pub async fn saved_albums(&self) -> Result<Vec<SavedAlbum>, ApiError> {
        let albums: ItemList<SavedAlbum> =
            self.dispatcher.execute(Request::new(&endpoints::SAVED_ALBUMS)).await?;
        Ok(albums.into_vec())
    }

    /// Delete a track owned by the current artist account.
    pub async fn delete_track(&self, id: &str) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, "API: delete_track");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::DELETE_TRACK).param("id", id))
            .await
    }

    /// Delete an album owned by the current artist account.
    pub async fn delete_album(&self, id: &str) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, "API: delete_album");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::DELETE_ALBUM).param("id", id))
            .await
    }
}
