//! Client-side access layer for the music streaming API
//!
//! - `api`: endpoint descriptors and the dispatcher that sends them, with
//!   session injection and outcome normalization
//! - `auth`: where the session comes from
//! - `search`: free-text search classification
//! - `history`: recently played albums and playlists, resolved concurrently
//! - `client`: one method per remote endpoint
//! - `model`: data types exchanged with the API

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod model;
pub mod search;

pub use auth::{CredentialProvider, FileSessionStore, Session, StaticSession};
pub use client::SpotifyClient;
pub use config::ClientConfig;
pub use error::{ApiError, Unauthenticated};
pub use history::{HistoryAggregator, HistoryBatch, HistoryDetail, HistoryEntry};
pub use search::{EntityType, SearchQuery, classify};
