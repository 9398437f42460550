use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use spotify_client::history::ContextKind;
use spotify_client::{ApiError, ClientConfig, HistoryDetail, Session, SpotifyClient, StaticSession};

fn logged_in(server: &MockServer) -> SpotifyClient {
    let credentials = Arc::new(StaticSession::from(Session::new("tok-123")));
    SpotifyClient::new(&ClientConfig::with_api_base(server.base_url()), credentials).unwrap()
}

async fn serve_contexts(server: &MockServer, uris: &[&str]) {
    let contexts: Vec<_> = uris.iter().map(|uri| json!({ "uri": uri })).collect();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/me/player/recently-played-contexts")
                .query_param("limit", "3");
            then.status(200).json_body(json!({ "playContexts": contexts }));
        })
        .await;
}

#[tokio::test]
async fn entries_keep_server_order_despite_slow_fetches() {
    let server = MockServer::start_async().await;
    serve_contexts(&server, &["spotify:playlist:p1", "spotify:album:a1", "spotify:album:a2"]).await;

    let slow_playlist = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/playlists/p1");
            then.status(200)
                .delay(Duration::from_millis(200))
                .json_body(json!({ "id": "p1", "name": "Slow Mix" }));
        })
        .await;
    for (id, name) in [("a1", "First"), ("a2", "Second")] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/api/v1/albums/{id}"));
                then.status(200).json_body(json!({ "_id": id, "name": name }));
            })
            .await;
    }

    let batch = logged_in(&server).recently_played_lists(3).await.unwrap();

    slow_playlist.assert_async().await;
    let names: Vec<_> = batch.successes().map(HistoryDetail::name).collect();
    assert_eq!(names, ["Slow Mix", "First", "Second"]);
    let kinds: Vec<_> = batch.successes().map(HistoryDetail::kind).collect();
    assert_eq!(kinds, [ContextKind::Playlist, ContextKind::Album, ContextKind::Album]);
}

#[tokio::test]
async fn one_missing_entry_does_not_sink_the_batch() {
    let server = MockServer::start_async().await;
    serve_contexts(&server, &["spotify:album:a1", "spotify:album:gone", "spotify:artist:ar1"]).await;

    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/a1");
            then.status(200).json_body(json!({ "id": "a1", "name": "Kept" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/gone");
            then.status(404);
        })
        .await;
    // Non-album contexts are looked up as playlists.
    let as_playlist = server
        .mock_async(|when, then| {
            when.path("/api/v1/playlists/ar1");
            then.status(200).json_body(json!({ "id": "ar1", "name": "Artist Radio" }));
        })
        .await;

    let batch = logged_in(&server).recently_played_lists(3).await.unwrap();

    as_playlist.assert_async().await;
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.failure_count(), 1);
    let entries = batch.entries();
    assert_eq!(entries[0].detail().map(HistoryDetail::name), Some("Kept"));
    assert!(matches!(entries[1].outcome, Err(ApiError::NotFound)));
    assert_eq!(entries[2].detail().map(HistoryDetail::kind), Some(ContextKind::Playlist));

    let failure = batch.into_complete().unwrap_err();
    assert_eq!(failure.index, 1);
    assert_eq!(failure.uri, "spotify:album:gone");
}

#[tokio::test]
async fn failed_context_listing_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/me/player/recently-played-contexts");
            then.status(500);
        })
        .await;

    let result = logged_in(&server).recently_played_lists(3).await;
    assert!(matches!(result, Err(ApiError::ServerFailure { .. })));
}
