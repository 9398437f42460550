//! Albums, artists, browsing and search

use serde_json::json;

use super::{join_ids, SpotifyClient};
use crate::api::{endpoints, Request};
use crate::error::{ApiError, Unauthenticated};
use crate::model::{
    AdResponse, Album, Artist, Categories, Category, CategoryPlaylists, FollowedArtists, ItemList,
    NewReleases, Playlist, RelatedArtists, SearchResults, Track, UserProfile,
};
use crate::search;

/// Shown when the server has no ad to offer.
pub const PLACEHOLDER_AD_URL: &str = "https://searchengineland.com/figz/wp-content/seloads/2017/02/google-adwords-green-outline-ad-2017-1920.png";

const SEARCH_LIMIT: u32 = 6;
const NEW_RELEASES_LIMIT: u32 = 40;
const CATEGORY_COUNTRY: &str = "EG";
const CATEGORY_PLAYLISTS_LIMIT: u32 = 20;

impl SpotifyClient {
    /// Classify free-text input and search the requested entity types.
    pub async fn search(&self, raw_input: &str) -> Result<SearchResults, ApiError> {
        let query = search::classify(raw_input);
        tracing::debug!(
            term = %query.cleaned_term,
            types = %query.type_param(),
            "API: search"
        );
        let request = Request::new(&endpoints::SEARCH)
            .query("q", &query.cleaned_term)
            .query("type", query.type_param())
            .query("limit", SEARCH_LIMIT)
            .query("offset", 0);
        self.dispatcher.execute(request).await
    }

    pub async fn get_album(&self, id: &str) -> Result<Album, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::ALBUM).param("id", id))
            .await
    }

    pub async fn album_tracks(&self, id: &str) -> Result<Vec<Track>, ApiError> {
        let tracks: ItemList<Track> = self
            .dispatcher
            .execute(Request::new(&endpoints::ALBUM_TRACKS).param("id", id))
            .await?;
        Ok(tracks.into_vec())
    }

    pub async fn get_artist(&self, id: &str) -> Result<Artist, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::ARTIST).param("id", id))
            .await
    }

    pub async fn artist_albums(&self, id: &str) -> Result<Vec<Album>, ApiError> {
        let albums: ItemList<Album> = self
            .dispatcher
            .execute(Request::new(&endpoints::ARTIST_ALBUMS).param("id", id))
            .await?;
        Ok(albums.into_vec())
    }

    pub async fn artist_top_tracks(&self, id: &str) -> Result<Vec<Track>, ApiError> {
        let tracks: ItemList<Track> = self
            .dispatcher
            .execute(Request::new(&endpoints::ARTIST_TOP_TRACKS).param("id", id))
            .await?;
        Ok(tracks.into_vec())
    }

    pub async fn related_artists(&self, id: &str) -> Result<Vec<Artist>, ApiError> {
        let related: RelatedArtists = self
            .dispatcher
            .execute(Request::new(&endpoints::RELATED_ARTISTS).param("id", id))
            .await?;
        Ok(related.artists.into_vec())
    }

    pub async fn followed_artists(&self) -> Result<Vec<Artist>, ApiError> {
        let followed: FollowedArtists = self
            .dispatcher
            .execute(
                Request::new(&endpoints::FOLLOWED_ARTISTS)
                    .query("type", "artist")
                    .query("limit", 20),
            )
            .await?;
        Ok(followed.artists.into_vec())
    }

    pub async fn follow_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: follow_artists");
        let request = Request::new(&endpoints::FOLLOW_ARTISTS)
            .query("type", "artist")
            .body(json!({ "ids": join_ids(ids) }));
        self.dispatcher.execute_sentinel(request).await
    }

    pub async fn unfollow_artists<S: AsRef<str>>(&self, ids: &[S]) -> Result<bool, Unauthenticated> {
        tracing::debug!(count = ids.len(), "API: unfollow_artists");
        let request = Request::new(&endpoints::UNFOLLOW_ARTISTS)
            .query("type", "artist")
            .body(json!({ "ids": join_ids(ids) }));
        self.dispatcher.execute_sentinel(request).await
    }

    /// One flag per id, in request order.
    pub async fn is_following<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<bool>, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::FOLLOWING_CONTAINS).query("ids", join_ids(ids)))
            .await
    }

    pub async fn user_profile(&self, id: &str) -> Result<UserProfile, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::USER_PROFILE).param("id", id))
            .await
    }

    pub async fn new_releases(&self) -> Result<Vec<Album>, ApiError> {
        let releases: NewReleases = self
            .dispatcher
            .execute(Request::new(&endpoints::NEW_RELEASES).query("limit", NEW_RELEASES_LIMIT))
            .await?;
        Ok(releases.albums.into_vec())
    }

    pub async fn recommended_tracks(&self) -> Result<Vec<Track>, ApiError> {
        let tracks: ItemList<Track> =
            self.dispatcher.execute(Request::new(&endpoints::RECOMMENDED_TRACKS)).await?;
        Ok(tracks.into_vec())
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let categories: Categories = self.dispatcher.execute(Request::new(&endpoints::CATEGORIES)).await?;
        Ok(categories.categories.into_vec())
    }

    pub async fn category(&self, id: &str) -> Result<Category, ApiError> {
        self.dispatcher
            .execute(Request::new(&endpoints::CATEGORY).param("id", id))
            .await
    }

    pub async fn category_playlists(&self, id: &str) -> Result<Vec<Playlist>, ApiError> {
        let request = Request::new(&endpoints::CATEGORY_PLAYLISTS)
            .param("id", id)
            .query("country", CATEGORY_COUNTRY)
            .query("limit", CATEGORY_PLAYLISTS_LIMIT)
            .query("offset", 0);
        let playlists: CategoryPlaylists = self.dispatcher.execute(request).await?;
        Ok(playlists.playlists.into_vec())
    }

    /// Image URL of the current ad, or [`PLACEHOLDER_AD_URL`] if there is
    /// none or it cannot be fetched.
    pub async fn ad_image_url(&self) -> String {
        let ad: Option<AdResponse> = match self.dispatcher.execute_or(Request::new(&endpoints::AD), None).await {
            Ok(ad) => ad,
            Err(_) => None,
        };
        ad.and_then(|ad| ad.ad.images.into_iter().next())
            .map(|image| image.url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_AD_URL.to_string())
    }
}
