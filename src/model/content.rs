//! Catalog objects returned by the API: tracks, albums, playlists, artists, users.
//!
//! Decoding is lenient about missing fields (they default) but a field that is
//! present with the wrong type fails the whole payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::ItemList;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistSummary>,
    pub images: Vec<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistSummary>,
    pub album: Option<AlbumSummary>,
    pub duration_ms: u64,
    pub uri: Option<String>,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub album_type: Option<String>,
    pub artists: Vec<ArtistSummary>,
    pub images: Vec<Image>,
    pub release_date: Option<String>,
    pub genres: Vec<String>,
    pub tracks: ItemList<Track>,
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistTrack {
    pub added_at: Option<DateTime<Utc>>,
    pub track: Option<Track>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<UserProfile>,
    pub images: Vec<Image>,
    pub public: Option<bool>,
    pub collaborative: Option<bool>,
    pub tracks: ItemList<PlaylistTrack>,
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub popularity: Option<u32>,
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedTrack {
    pub added_at: Option<DateTime<Utc>>,
    pub track: Track,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedAlbum {
    pub added_at: Option<DateTime<Utc>>,
    pub album: Album,
}

/// One page of a paged listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            limit: None,
            offset: None,
            next: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    pub tracks: Option<Paging<Track>>,
    pub artists: Option<Paging<Artist>>,
    pub albums: Option<Paging<Album>>,
    pub playlists: Option<Paging<Playlist>>,
    pub users: Option<Paging<UserProfile>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub icons: Vec<Image>,
}

// Envelopes around list responses

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FollowedArtists {
    pub artists: ItemList<Artist>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RelatedArtists {
    pub artists: ItemList<Artist>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NewReleases {
    pub albums: ItemList<Album>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Categories {
    pub categories: ItemList<Category>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CategoryPlaylists {
    pub playlists: ItemList<Playlist>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdResponse {
    pub ad: Ad,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Ad {
    pub images: Vec<Image>,
}
