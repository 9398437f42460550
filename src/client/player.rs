//! Playback control methods

use serde_json::json;

use super::SpotifyClient;
use crate::api::{endpoints, Request};
use crate::error::{ApiError, Unauthenticated};
use crate::model::{
    ContextType, CurrentlyPlaying, PlayContext, PlayHistory, PlaybackState, RecentlyPlayedContexts,
    RecentlyPlayedTracks, RepeatState,
};

impl SpotifyClient {
    /// `None` when nothing is playing or the call failed for any reason other
    /// than authentication.
    pub async fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>, Unauthenticated> {
        tracing::trace!("Fetching currently playing track");
        self.dispatcher
            .execute_or(Request::new(&endpoints::CURRENTLY_PLAYING), None)
            .await
    }

    /// `None` when there is no playback or the call failed for any reason
    /// other than authentication.
    pub async fn playback_state(&self) -> Result<Option<PlaybackState>, Unauthenticated> {
        tracing::trace!("Fetching current playback state");
        let result: Result<Option<PlaybackState>, Unauthenticated> = self
            .dispatcher
            .execute_or(Request::new(&endpoints::PLAYBACK_STATE), None)
            .await;
        if let Ok(Some(ref playback)) = result {
            tracing::trace!(
                is_playing = playback.is_playing,
                device = ?playback.device.as_ref().map(|d| &d.name),
                "Got playback state"
            );
        }
        result
    }

    pub async fn play(&self) -> Result<bool, Unauthenticated> {
        tracing::debug!("API: resume_playback");
        self.dispatcher.execute_sentinel(Request::new(&endpoints::PLAY)).await
    }

    pub async fn pause(&self) -> Result<bool, Unauthenticated> {
        tracing::debug!("API: pause_playback");
        self.dispatcher.execute_sentinel(Request::new(&endpoints::PAUSE)).await
    }

    pub async fn next_track(&self) -> Result<bool, Unauthenticated> {
        tracing::debug!("API: next_track");
        self.dispatcher.execute_sentinel(Request::new(&endpoints::NEXT)).await
    }

    pub async fn previous_track(&self) -> Result<bool, Unauthenticated> {
        tracing::debug!("API: previous_track");
        self.dispatcher.execute_sentinel(Request::new(&endpoints::PREVIOUS)).await
    }

    pub async fn set_shuffle(&self, state: bool) -> Result<bool, Unauthenticated> {
        tracing::debug!(state, "API: set_shuffle");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::SHUFFLE).query("state", state))
            .await
    }

    pub async fn set_repeat(&self, state: RepeatState) -> Result<bool, Unauthenticated> {
        tracing::debug!(state = ?state, "API: set_repeat");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::REPEAT).query("state", state.as_param()))
            .await
    }

    pub async fn seek(&self, position_ms: u64) -> Result<bool, Unauthenticated> {
        tracing::debug!(position_ms, "API: seek");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::SEEK).query("position_ms", position_ms))
            .await
    }

    /// Values above 100 are clamped.
    pub async fn set_volume(&self, volume_percent: u8) -> Result<bool, Unauthenticated> {
        let volume_percent = volume_percent.min(100);
        tracing::debug!(volume_percent, "API: set_volume");
        self.dispatcher
            .execute_sentinel(Request::new(&endpoints::VOLUME).query("volume_percent", volume_percent))
            .await
    }

    /// Start `track_id` inside the given album, playlist or artist context.
    pub async fn play_track(
        &self,
        track_id: &str,
        context: ContextType,
        context_id: &str,
    ) -> Result<bool, Unauthenticated> {
        let context_uri = context.uri(context_id);
        tracing::debug!(track_id, context_uri = %context_uri, "API: play_track");
        let request = Request::new(&endpoints::PLAY_TRACK)
            .body(json!({ "trackId": track_id, "context_uri": context_uri }));
        self.dispatcher.execute_sentinel(request).await
    }

    pub async fn recently_played_tracks(&self, limit: u32) -> Result<Vec<PlayHistory>, ApiError> {
        let page: RecentlyPlayedTracks = self
            .dispatcher
            .execute(Request::new(&endpoints::RECENTLY_PLAYED_TRACKS).query("limit", limit))
            .await?;
        Ok(page.items.into_vec())
    }

    pub async fn recently_played_contexts(&self, limit: u32) -> Result<Vec<PlayContext>, ApiError> {
        let contexts: RecentlyPlayedContexts = self
            .dispatcher
            .execute(Request::new(&endpoints::RECENTLY_PLAYED_CONTEXTS).query("limit", limit))
            .await?;
        tracing::debug!(count = contexts.play_contexts.len(), "Got recently played contexts");
        Ok(contexts.play_contexts)
    }
}
