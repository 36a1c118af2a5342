use std::{cell::Cell, rc::Rc};

use super::*;

/// Tests that a stored token is attached to every request.
///
/// Expected: request matched only when `Authorization: Token abc123` is present
#[tokio::test]
async fn attaches_stored_token() {
    let test = signed_in().await;
    let (api, _) = client(&test);

    let mock = test
        .server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/clubs/")
                .header("Authorization", "Token abc123");
            then.status(200).json_body(json!([]));
        })
        .await;

    let clubs: Vec<serde_json::Value> = api.get_list("/api/clubs/", "Failed").await.unwrap();

    mock.assert_async().await;
    assert!(clubs.is_empty());
}

/// Tests that endpoint paths keep a path prefix configured on the base URL.
///
/// Expected: `/backend/api/clubs/` is requested
#[tokio::test]
async fn joins_paths_below_base_prefix() {
    let test = TestBuilder::new().build().await;
    let config = Config::with_base_url(&test.server.url("/backend")).unwrap();
    let api = ApiClient::new(&config, CredentialStore::new(MemoryStore::new()));

    let mock = test
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/backend/api/clubs/");
            then.status(200).json_body(json!([]));
        })
        .await;

    let result: Result<Vec<serde_json::Value>, _> = api.get_list("/api/clubs/", "Failed").await;

    mock.assert_async().await;
    assert!(result.is_ok());
}

/// Tests that a 401 clears the stored token and user and runs the session-expired hook.
///
/// Expected: Err with status 401, storage empty, hook called once
#[tokio::test]
async fn unauthorized_clears_credentials_and_fires_hook() {
    let test = signed_in().await;
    let (api, memory) = client(&test);
    let expired = Rc::new(Cell::new(0));
    let api = api.with_unauthorized_hook({
        let expired = expired.clone();
        move || expired.set(expired.get() + 1)
    });

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/");
            then.status(401)
                .json_body(json!({"detail": "Invalid token."}));
        })
        .await;

    let err = api
        .get::<serde_json::Value>("/api/events/", "Failed to fetch events")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Invalid token.");
    assert!(memory.is_empty());
    assert_eq!(api.credentials().session(), None);
    assert_eq!(expired.get(), 1);
}

/// Tests that non-401 failures leave the stored session alone.
///
/// Expected: Err with status 403, token still stored
#[tokio::test]
async fn forbidden_keeps_credentials() {
    let test = signed_in().await;
    let (api, memory) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/clubs/1/");
            then.status(403)
                .json_body(json!({"message": "Only officers can delete clubs"}));
        })
        .await;

    let err = api
        .delete("/api/clubs/1/", "Failed to delete club")
        .await
        .unwrap_err();

    assert_eq!(err.status, 403);
    assert_eq!(err.message, "Only officers can delete clubs");
    assert_eq!(memory.get(AUTH_TOKEN_KEY).as_deref(), Some("abc123"));
}

/// Tests that an error body without a usable message falls back to the operation's message.
///
/// Expected: Err with status 500 and the fallback message
#[tokio::test]
async fn falls_back_when_body_has_no_message() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(500).body("<html>Internal Server Error</html>");
        })
        .await;

    let err = api
        .get_list::<serde_json::Value>("/api/clubs/", "Failed to fetch clubs")
        .await
        .unwrap_err();

    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Failed to fetch clubs");
}

/// Tests that a success response with an unexpected body is reported as status 0.
///
/// Expected: Err with status 0 and the fallback message
#[tokio::test]
async fn unparseable_success_body_is_status_zero() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/1/");
            then.status(200).json_body(json!({"unexpected": true}));
        })
        .await;

    let err = crate::client::api::club::get_club(&api, 1)
        .await
        .unwrap_err();

    assert_eq!(err.status, 0);
    assert_eq!(err.message, "Failed to fetch club");
}

/// Tests that an unreachable backend surfaces as a transport error.
///
/// Expected: Err with status 0 and the fallback message
#[tokio::test]
async fn unreachable_backend_is_status_zero() {
    let config = Config::with_base_url("http://127.0.0.1:1").unwrap();
    let api = ApiClient::new(&config, CredentialStore::new(MemoryStore::new()));

    let err = api
        .get::<serde_json::Value>("/auth/me/", "Failed to fetch current user")
        .await
        .unwrap_err();

    assert_eq!(err.status, 0);
    assert_eq!(err.message, "Failed to fetch current user");
}

/// Tests that list endpoints accept the paginated envelope as well as a bare array.
///
/// Expected: results unwrapped from the envelope
#[tokio::test]
async fn unwraps_paginated_lists() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);
    let clubs = factory::create_clubs(2);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": clubs,
            }));
        })
        .await;

    let result = crate::client::api::club::list_clubs(&api).await.unwrap();

    assert_eq!(result.len(), 2);
}
