//! Model module - Data types exchanged with the API
//!
//! - `types`: small shared value types (repeat state, context type, item lists)
//! - `playback`: player state and listening history
//! - `content`: catalog objects (tracks, albums, playlists, artists, users)

mod content;
mod playback;
mod types;

pub use types::{ContextType, ItemList, RepeatState};

pub use playback::{CurrentlyPlaying, Device, PlayContext, PlayHistory, PlaybackState, RecentlyPlayedContexts};

pub use content::{
    Album, AlbumSummary, Artist, ArtistSummary, Category, Image, Paging, Playlist, PlaylistTrack,
    SavedAlbum, SavedTrack, SearchResults, Track, UserProfile,
};

pub(crate) use content::{AdResponse, Categories, CategoryPlaylists, FollowedArtists, NewReleases, RelatedArtists};
pub(crate) use playback::RecentlyPlayedTracks;
