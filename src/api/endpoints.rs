//! Every remote endpoint the client talks to, with its contract.
//!
//! Sentinel success codes are part of the server's interface and differ
//! between endpoints; do not unify them.

use reqwest::{Method, StatusCode};

use super::request::{Auth, Endpoint};

// Player

pub static CURRENTLY_PLAYING: Endpoint =
    Endpoint::payload("currently_playing", Method::GET, "/me/player/currently-playing");
pub static PLAYBACK_STATE: Endpoint = Endpoint::payload("playback_state", Method::GET, "/me/player");
pub static PLAY: Endpoint =
    Endpoint::sentinel("play", Method::PUT, "/me/player/play", StatusCode::NO_CONTENT);
pub static PAUSE: Endpoint =
    Endpoint::sentinel("pause", Method::PUT, "/me/player/pause", StatusCode::NO_CONTENT);
pub static NEXT: Endpoint =
    Endpoint::sentinel("next", Method::POST, "/me/player/next", StatusCode::NO_CONTENT);
pub static PREVIOUS: Endpoint =
    Endpoint::sentinel("previous", Method::POST, "/me/player/previous", StatusCode::NO_CONTENT);
pub static SHUFFLE: Endpoint =
    Endpoint::sentinel("shuffle", Method::PUT, "/me/player/shuffle", StatusCode::NO_CONTENT);
pub static REPEAT: Endpoint =
    Endpoint::sentinel("repeat", Method::PUT, "/me/player/repeat", StatusCode::NO_CONTENT);
pub static SEEK: Endpoint =
    Endpoint::sentinel("seek", Method::PUT, "/me/player/seek", StatusCode::NO_CONTENT);
pub static VOLUME: Endpoint =
    Endpoint::sentinel("volume", Method::PUT, "/me/player/volume", StatusCode::NO_CONTENT);
pub static PLAY_TRACK: Endpoint =
    Endpoint::sentinel("play_track", Method::POST, "/me/player/track", StatusCode::NO_CONTENT);
pub static RECENTLY_PLAYED_TRACKS: Endpoint =
    Endpoint::payload("recently_played_tracks", Method::GET, "/me/player/recently-played");
pub static RECENTLY_PLAYED_CONTEXTS: Endpoint = Endpoint::payload(
    "recently_played_contexts",
    Method::GET,
    "/me/player/recently-played-contexts",
);

// Library

pub static SAVE_TRACKS: Endpoint =
    Endpoint::sentinel("save_tracks", Method::PUT, "/me/tracks", StatusCode::CREATED);
pub static REMOVE_TRACKS: Endpoint =
    Endpoint::sentinel("remove_tracks", Method::DELETE, "/me/tracks", StatusCode::OK);
pub static SAVED_TRACKS: Endpoint = Endpoint::payload("saved_tracks", Method::GET, "/me/tracks");
pub static CONTAINS_TRACKS: Endpoint =
    Endpoint::payload("contains_tracks", Method::GET, "/me/tracks/contains");
pub static SAVE_ALBUMS: Endpoint =
    Endpoint::sentinel("save_albums", Method::PUT, "/me/albums", StatusCode::CREATED);
pub static REMOVE_ALBUMS: Endpoint =
    Endpoint::sentinel("remove_albums", Method::DELETE, "/me/albums", StatusCode::OK);
pub static SAVED_ALBUMS: Endpoint = Endpoint::payload("saved_albums", Method::GET, "/me/albums");
pub static CONTAINS_ALBUMS: Endpoint =
    Endpoint::payload("contains_albums", Method::GET, "/me/albums/contains");
pub static DELETE_TRACK: Endpoint =
    Endpoint::sentinel("delete_track", Method::DELETE, "/tracks/{id}", StatusCode::OK);
pub static DELETE_ALBUM: Endpoint =
    Endpoint::sentinel("delete_album", Method::DELETE, "/albums/{id}", StatusCode::OK);

// Playlists

pub static PLAYLIST: Endpoint = Endpoint::payload("playlist", Method::GET, "/playlists/{id}");
pub static PLAYLIST_TRACKS: Endpoint =
    Endpoint::payload("playlist_tracks", Method::GET, "/playlists/{id}/tracks");
pub static MY_PLAYLISTS: Endpoint = Endpoint::payload("my_playlists", Method::GET, "/me/playlists");
pub static USER_PLAYLISTS: Endpoint =
    Endpoint::payload("user_playlists", Method::GET, "/users/{id}/playlists");
pub static CREATE_PLAYLIST: Endpoint =
    Endpoint::payload("create_playlist", Method::POST, "/users/playlists");
pub static FOLLOW_PLAYLIST: Endpoint =
    Endpoint::sentinel("follow_playlist", Method::PUT, "/playlists/{id}/followers", StatusCode::OK);
pub static UNFOLLOW_PLAYLIST: Endpoint = Endpoint::sentinel(
    "unfollow_playlist",
    Method::DELETE,
    "/playlists/{id}/followers",
    StatusCode::OK,
);
pub static PLAYLIST_FOLLOWERS_CONTAIN: Endpoint = Endpoint::payload(
    "playlist_followers_contain",
    Method::GET,
    "/playlists/{id}/followers/contains",
);
pub static ADD_PLAYLIST_TRACKS: Endpoint = Endpoint::sentinel(
    "add_playlist_tracks",
    Method::POST,
    "/playlists/{id}/tracks",
    StatusCode::CREATED,
);
pub static REMOVE_PLAYLIST_TRACKS: Endpoint = Endpoint::sentinel(
    "remove_playlist_tracks",
    Method::DELETE,
    "/playlists/{id}/tracks",
    StatusCode::OK,
);
pub static CHANGE_PLAYLIST_DETAILS: Endpoint = Endpoint::sentinel(
    "change_playlist_details",
    Method::PUT,
    "/playlists/{id}",
    StatusCode::OK,
);

// Albums and artists

pub static ALBUM: Endpoint = Endpoint::payload("album", Method::GET, "/albums/{id}");
pub static ALBUM_TRACKS: Endpoint = Endpoint::payload("album_tracks", Method::GET, "/albums/{id}/tracks");
pub static ARTIST: Endpoint = Endpoint::payload("artist", Method::GET, "/artists/{id}");
pub static ARTIST_ALBUMS: Endpoint =
    Endpoint::payload("artist_albums", Method::GET, "/artists/{id}/albums");
pub static ARTIST_TOP_TRACKS: Endpoint =
    Endpoint::payload("artist_top_tracks", Method::GET, "/artists/{id}/top-tracks");
pub static RELATED_ARTISTS: Endpoint =
    Endpoint::payload("related_artists", Method::GET, "/artists/{id}/related-artists");
pub static FOLLOWED_ARTISTS: Endpoint =
    Endpoint::payload("followed_artists", Method::GET, "/me/following");
pub static FOLLOW_ARTISTS: Endpoint =
    Endpoint::sentinel("follow_artists", Method::PUT, "/me/following", StatusCode::NO_CONTENT);
pub static UNFOLLOW_ARTISTS: Endpoint =
    Endpoint::sentinel("unfollow_artists", Method::DELETE, "/me/following", StatusCode::NO_CONTENT);
pub static FOLLOWING_CONTAINS: Endpoint =
    Endpoint::payload("following_contains", Method::GET, "/me/following/contains");

// Browse and search

pub static SEARCH: Endpoint = Endpoint::payload("search", Method::GET, "/search");
pub static NEW_RELEASES: Endpoint =
    Endpoint::payload("new_releases", Method::GET, "/browse/new-releases");
pub static RECOMMENDED_TRACKS: Endpoint =
    Endpoint::payload("recommended_tracks", Method::GET, "/tracks/recommend");
pub static CATEGORIES: Endpoint =
    Endpoint::public_payload("categories", Method::GET, "/browse/categories");
pub static CATEGORY: Endpoint =
    Endpoint::public_payload("category", Method::GET, "/browse/categories/{id}");
pub static CATEGORY_PLAYLISTS: Endpoint = Endpoint::public_payload(
    "category_playlists",
    Method::GET,
    "/browse/categories/{id}/playlists",
);
pub static AD: Endpoint = Endpoint::public_payload("ad", Method::GET, "/ads");

// Authentication and account

pub static LOGIN: Endpoint =
    Endpoint::raw("login", Method::POST, "/authentication/login", Auth::Public);
pub static SIGNUP: Endpoint =
    Endpoint::raw("signup", Method::POST, "/authentication/signup", Auth::Public);
pub static FORGOT_PASSWORD: Endpoint =
    Endpoint::raw("forgot_password", Method::POST, "/authentication/forgotPassword", Auth::Public);
pub static RESET_PASSWORD: Endpoint = Endpoint::raw(
    "reset_password",
    Method::PATCH,
    "/authentication/resetPassword/{token}",
    Auth::Public,
);
pub static CONFIRM_EMAIL: Endpoint = Endpoint::raw(
    "confirm_email",
    Method::PATCH,
    "/authentication/signup-confirm/{token}",
    Auth::Public,
);
pub static FETCH_TOKEN: Endpoint =
    Endpoint::raw("fetch_token", Method::GET, "/authentication/token", Auth::Public);
pub static UPDATE_PASSWORD: Endpoint = Endpoint::raw(
    "update_password",
    Method::PATCH,
    "/authentication/updatePassword",
    Auth::Required,
);
pub static LOGOUT: Endpoint =
    Endpoint::raw("logout", Method::GET, "/authentication/logout", Auth::Required);
pub static CURRENT_PROFILE: Endpoint =
    Endpoint::raw("current_profile", Method::GET, "/users/me", Auth::Required);
pub static EDIT_PROFILE: Endpoint =
    Endpoint::raw("edit_profile", Method::PATCH, "/users", Auth::Required);
pub static USER_PROFILE: Endpoint = Endpoint::payload("user_profile", Method::GET, "/users/{id}");
