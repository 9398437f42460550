use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use spotify_client::api::{RequestDispatcher, Request, endpoints};
use spotify_client::{
    ApiError, ClientConfig, CredentialProvider, FileSessionStore, Session, SpotifyClient, StaticSession,
    Unauthenticated,
};

fn client_with(base: &str, credentials: impl CredentialProvider + 'static) -> SpotifyClient {
    SpotifyClient::new(&ClientConfig::with_api_base(base), Arc::new(credentials)).unwrap()
}

fn logged_in(server: &MockServer) -> SpotifyClient {
    client_with(&server.base_url(), StaticSession::from(Session::new("tok-123")))
}

fn has_no_authorization(req: &HttpMockRequest) -> bool {
    !req.headers
        .as_ref()
        .is_some_and(|headers| headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("authorization")))
}

#[tokio::test]
async fn sentinel_is_true_only_for_its_exact_status() {
    let server = MockServer::start_async().await;
    let play = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/me/player/play")
                .header("authorization", "Bearer tok-123");
            then.status(204);
        })
        .await;
    // Saving a track succeeds with 201; a 200 is not good enough.
    let save = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/v1/me/tracks").query_param("ids", "t1,t2");
            then.status(200);
        })
        .await;

    let client = logged_in(&server);
    assert_eq!(client.play().await, Ok(true));
    assert_eq!(client.save_tracks(&["t1", "t2"]).await, Ok(false));

    play.assert_hits_async(1).await;
    save.assert_hits_async(1).await;
}

#[tokio::test]
async fn sentinel_failure_statuses_are_false() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/v1/me/player/pause");
            then.status(404).json_body(json!({ "message": "no active device" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/me/player/next");
            then.status(500).body("boom");
        })
        .await;

    let client = logged_in(&server);
    assert_eq!(client.pause().await, Ok(false));
    assert_eq!(client.next_track().await, Ok(false));
}

#[tokio::test]
async fn sentinel_transport_failure_is_false() {
    let client = client_with("http://127.0.0.1:9", StaticSession::from(Session::new("tok-123")));
    assert_eq!(client.previous_track().await, Ok(false));
}

#[tokio::test]
async fn missing_session_fails_before_any_request() {
    let server = MockServer::start_async().await;
    let catch_all = server
        .mock_async(|_when, then| {
            then.status(204);
        })
        .await;

    let client = client_with(&server.base_url(), StaticSession::anonymous());
    assert_eq!(client.play().await, Err(Unauthenticated));
    assert_eq!(client.currently_playing().await, Err(Unauthenticated));
    assert_eq!(client.is_track_saved("t1").await, Err(Unauthenticated));
    assert!(matches!(client.get_album("a1").await, Err(ApiError::Unauthenticated(_))));
    assert!(matches!(client.logout().await, Err(ApiError::Unauthenticated(_))));

    catch_all.assert_hits_async(0).await;
}

#[tokio::test]
async fn server_rejection_is_unauthenticated_for_every_contract() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|_when, then| {
            then.status(401).json_body(json!({ "message": "jwt expired" }));
        })
        .await;

    let client = logged_in(&server);
    assert_eq!(client.play().await, Err(Unauthenticated));
    assert_eq!(client.saved_tracks().await, Err(Unauthenticated));
    assert!(client.get_playlist("p1").await.unwrap_err().is_unauthenticated());
}

#[tokio::test]
async fn public_endpoints_never_carry_the_session() {
    let server = MockServer::start_async().await;
    let categories = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/browse/categories")
                .matches(has_no_authorization);
            then.status(200)
                .json_body(json!({ "categories": { "items": [{ "_id": "c1", "name": "Pop" }] } }));
        })
        .await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/authentication/login")
                .matches(has_no_authorization);
            then.status(200).json_body(json!({ "token": "new-token" }));
        })
        .await;

    let client = logged_in(&server);
    let found = client.categories().await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Pop");

    let response = client
        .login(&spotify_client::client::LoginRequest::new("a@b.c", "secret"))
        .await
        .unwrap();
    assert_eq!(Session::from_login(&response), Some(Session::new("new-token")));

    categories.assert_async().await;
    login.assert_async().await;
}

#[tokio::test]
async fn redirects_are_not_followed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/v1/me/player/play");
            then.status(307).header("location", "/api/v1/elsewhere");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/albums/a1");
            then.status(302).header("location", "/api/v1/other");
        })
        .await;
    let elsewhere = server
        .mock_async(|when, then| {
            when.path("/api/v1/elsewhere");
            then.status(204);
        })
        .await;
    let other = server
        .mock_async(|when, then| {
            when.path("/api/v1/other");
            then.status(200).json_body(json!({ "id": "other", "name": "Redirected" }));
        })
        .await;

    let client = logged_in(&server);
    assert_eq!(client.play().await, Ok(false));
    match client.get_album("a1").await {
        Err(ApiError::ServerFailure { status, .. }) => assert_eq!(status.as_u16(), 302),
        other => panic!("expected server failure, got {other:?}"),
    }

    elsewhere.assert_hits_async(0).await;
    other.assert_hits_async(0).await;
}

#[tokio::test]
async fn payload_errors_are_typed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/gone");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/bad");
            then.status(422).json_body(json!({ "message": "invalid id" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/broken");
            then.status(502).body("upstream down");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/albums/garbled");
            then.status(200).json_body(json!({ "id": "garbled", "name": 7 }));
        })
        .await;

    let client = logged_in(&server);
    assert!(matches!(client.get_album("gone").await, Err(ApiError::NotFound)));
    match client.get_album("bad").await {
        Err(ApiError::ClientError { status, body }) => {
            assert_eq!(status.as_u16(), 422);
            assert!(body.contains("invalid id"));
        }
        other => panic!("expected client error, got {other:?}"),
    }
    assert!(matches!(client.get_album("broken").await, Err(ApiError::ServerFailure { .. })));
    assert!(matches!(client.get_album("garbled").await, Err(ApiError::InvalidPayload(_))));
}

#[tokio::test]
async fn fallbacks_replace_failures_but_not_missing_sessions() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/me/tracks/contains");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/me/tracks");
            then.status(503);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.path("/api/v1/me/player/currently-playing");
            then.status(204);
        })
        .await;

    let client = logged_in(&server);
    assert_eq!(client.is_track_saved("t1").await, Ok(false));
    assert_eq!(client.saved_tracks().await, Ok(vec![]));
    assert_eq!(client.currently_playing().await, Ok(None));
}

#[tokio::test]
async fn raw_responses_pass_through_unmodified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/authentication/login")
                .json_body(json!({ "email": "a@b.c", "password": "wrong" }));
            then.status(401).json_body(json!({ "status": "fail", "message": "Incorrect email or password" }));
        })
        .await;

    let client = client_with(&server.base_url(), StaticSession::anonymous());
    let response = client
        .login(&spotify_client::client::LoginRequest::new("a@b.c", "wrong"))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 401);
    assert_eq!(response.body["message"], "Incorrect email or password");
    assert_eq!(Session::from_login(&response), None);
}

#[tokio::test]
async fn session_is_read_fresh_for_each_request() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));

    let server = MockServer::start_async().await;
    let play = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/v1/me/player/play")
                .header("authorization", "Bearer fresh");
            then.status(204);
        })
        .await;

    let client = client_with(&server.base_url(), store.clone());
    assert_eq!(client.play().await, Err(Unauthenticated));
    play.assert_hits_async(0).await;

    store.save(&Session::new("fresh")).unwrap();
    assert_eq!(client.play().await, Ok(true));

    store.clear().unwrap();
    assert_eq!(client.play().await, Err(Unauthenticated));
    play.assert_hits_async(1).await;
}

#[tokio::test]
async fn dispatcher_substitutes_and_encodes_path_parameters() {
    let server = MockServer::start_async().await;
    let config = ClientConfig::with_api_base(server.base_url());
    let dispatcher = RequestDispatcher::new(&config, Arc::new(StaticSession::anonymous())).unwrap();

    let url = dispatcher
        .url_for(&Request::new(&endpoints::ALBUM_TRACKS).param("id", "a b").query("limit", 5))
        .unwrap();
    assert_eq!(url.path(), "/api/v1/albums/a%20b/tracks");
    assert_eq!(url.query(), Some("limit=5"));

    let missing = dispatcher.url_for(&Request::new(&endpoints::ALBUM_TRACKS));
    assert!(matches!(missing, Err(ApiError::InvalidRequest(_))));
}
