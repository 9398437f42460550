//! Playlist detail, following and editing

use serde::Serialize;
use serde_json::json;

use super::SpotifyClient;
use crate::api::{endpoints, Request};
use crate::error::{ApiError, Unauthenticated};
use crate::model::{ItemList, Playlist, PlaylistTrack};

/// Fields for creating a playlist or changing its details. Unset fields are
/// left out of the request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlaylistDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborative: Option<bool>,
}

impl PlaylistDetails {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl SpotifyClient {
    pub async fn get_playlist(&self, id: &str) -> Result<Playlist, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::PLAYLIST).param("id", id))
            .await
    }

    pub async fn playlist_tracks(&self, id: &str) -> Result<Vec<PlaylistTrack>, ApiError> {
        let tracks: ItemList<PlaylistTrack> = self
            .dispatcher
            .execute(Request::new(&endpoints::PLAYLIST_TRACKS).param("id", id))
            .await?;
        Ok(tracks.into_vec())
    }

    pub async fn my_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        let playlists: ItemList<Playlist> =
            self.dispatcher.execute(Request::new(&endpoints::MY_PLAYLISTS)).await?;
        Ok(playlists.into_vec())
    }

    pub async fn user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, ApiError> {
        let playlists: ItemList<Playlist> = self
            .dispatcher
            .execute(Request::new(&endpoints::USER_PLAYLISTS).param("id", user_id))
            .await?;
        Ok(playlists.into_vec())
    }

    pub async fn create_playlist(&self, details: &PlaylistDetails) -> Result<Playlist, ApiError> {
        tracing::debug!(name = ?details.name, "API: create_playlist");
        let request = Request::new(&endpoints::CREATE_PLAYLIST).json(details)?;
        self.dispatcher.execute(request).await
    }

    pub async fn follow_playlist(&self, id: &str) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, "API: follow_playlist");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::FOLLOW_PLAYLIST).param("id", id))
            .await
    }

    pub async fn unfollow_playlist(&self, id: &str) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, "API: unfollow_playlist");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::UNFOLLOW_PLAYLIST).param("id", id))
            .await
    }

    /// Whether `user_id` follows the playlist; `false` when unknown.
    pub async fn is_following_playlist(&self, id: &str, user_id: &str) -> Result<bool, Unauthenticated> {
        let flags: Vec<bool> = self
            .dispatcher
            .execute_or(
                Request::new(&endpoints::PLAYLIST_FOLLOWERS_CONTAIN)
                    .param("id", id)
                    .query("ids", user_id),
                Vec::new(),
            )
            .await?;
        Ok(flags.first().copied().unwrap_or(false))
    }

    pub async fn add_track_to_playlist(&self, id: &str, track_id: &str) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, track_id, "API: add_track_to_playlist");
        let request = Request::new(&endpoints::ADD_PLAYLIST_TRACKS)
            .param("id", id)
            .body(json!({ "ids": [track_id] }));
        self.dispatcher.execute_sentinel(request).await
    }

    /// Remove the occurrence of `track_id` at `position` (zero-based).
    pub async fn remove_track_from_playlist(
        &self,
        id: &str,
        track_id: &str,
        position: usize,
    ) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, track_id, position, "API: remove_track_from_playlist");
        let request = Request::new(&endpoints::REMOVE_PLAYLIST_TRACKS)
            .param("id", id)
            .body(json!({ "tracks": [{ "id": track_id, "positions": [position] }] }));
        self.dispatcher.execute_sentinel(request).await
    }

    pub async fn change_playlist_details(
        &self,
        id: &str,
        details: &PlaylistDetails,
    ) -> Result<bool, Unauthenticated> {
        tracing::debug!(id, "API: change_playlist_details");
        let request = match Request::new(&endpoints::CHANGE_PLAYLIST_DETAILS).param("id", id).json(details) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Could not encode playlist details");
                return Ok(false);
            }
        };
        self.dispatcher.execute_sentinel(request).await
    }
}
