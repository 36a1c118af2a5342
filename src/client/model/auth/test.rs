use httpmock::prelude::*;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, fixture};

use super::*;
use crate::client::{
    config::Config,
    storage::{CredentialStore, KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, USER_DATA_KEY},
};

fn client(test: &TestContext) -> (ApiClient, MemoryStore) {
    let memory = MemoryStore::new();
    if let Some(token) = &test.token {
        memory.set(AUTH_TOKEN_KEY, token);
    }
    if let Some(user) = test.stored_user() {
        memory.set(USER_DATA_KEY, &user);
    }
    let config = Config::with_base_url(&test.base_url()).unwrap();

    (
        ApiClient::new(&config, CredentialStore::new(memory.clone())),
        memory,
    )
}

/// Tests restoring when nothing is stored.
///
/// Expected: Unauthenticated without any request
#[tokio::test]
async fn restore_without_session_skips_network() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);
    let me = test
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me/");
            then.status(200).json_body(fixture::user::json());
        })
        .await;

    let state = restore_session(&api).await;

    assert_eq!(state, AuthState::Unauthenticated);
    me.assert_calls_async(0).await;
}

/// Tests restoring a token whose stored user is missing.
///
/// Expected: Unauthenticated without any request, token cleared
#[tokio::test]
async fn restore_with_half_session_clears_it() {
    let test = TestBuilder::new().with_token("abc123").build().await;
    let (api, memory) = client(&test);
    let me = test
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me/");
            then.status(200).json_body(fixture::user::json());
        })
        .await;

    let state = restore_session(&api).await;

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(memory.is_empty());
    me.assert_calls_async(0).await;
}

/// Tests restoring a stored session the backend still accepts.
///
/// Expected: Authenticated with the user returned by `/auth/me/`
#[tokio::test]
async fn restore_revalidates_stored_session() {
    let test = TestBuilder::new()
        .with_session("abc123", fixture::user::json())
        .build()
        .await;
    let (api, _) = client(&test);
    test.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/me/")
                .header("Authorization", "Token abc123");
            then.status(200)
                .json_body(fixture::user::builder().name("Ada", "King").build());
        })
        .await;

    let state = restore_session(&api).await;

    let user = state.user().unwrap();
    assert_eq!(user.last_name, "King");
    assert_eq!(api.credentials().user().unwrap().last_name, "King");
}

/// Tests restoring a stored session the backend rejects.
///
/// Expected: Unauthenticated, storage cleared
#[tokio::test]
async fn restore_with_rejected_token_clears_storage() {
    let test = TestBuilder::new()
        .with_session("stale", fixture::user::json())
        .build()
        .await;
    let (api, memory) = client(&test);
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me/");
            then.status(401)
                .json_body(json!({"detail": "Invalid token."}));
        })
        .await;

    let state = restore_session(&api).await;

    assert_eq!(state, AuthState::Unauthenticated);
    assert!(memory.is_empty());
}

/// Tests that a successful login stores the token and user together.
///
/// Expected: Ok with the user, both storage keys written
#[tokio::test]
async fn sign_in_persists_session() {
    let test = TestBuilder::new().build().await;
    let (api, memory) = client(&test);
    test.server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login/");
            then.status(200).json_body(json!({
                "token": "fresh",
                "user": fixture::user::builder().role("coordinator").build(),
            }));
        })
        .await;

    let user = sign_in(
        &api,
        &LoginDto {
            username: "ada".to_string(),
            password: "Secret123".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(user.role, Role::Coordinator);
    assert_eq!(memory.get(AUTH_TOKEN_KEY).as_deref(), Some("fresh"));
    assert_eq!(api.credentials().user(), Some(user));
}

/// Tests that a failed login leaves storage empty and the previous state in place.
///
/// Expected: Err propagated, state back to Unauthenticated
#[tokio::test]
async fn failed_sign_in_restores_previous_state() {
    let test = TestBuilder::new().build().await;
    let (api, memory) = client(&test);
    test.server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login/");
            then.status(400)
                .json_body(json!({"message": "Invalid credentials"}));
        })
        .await;

    let result = sign_in(&api, &LoginDto::default()).await;
    let state = AuthState::after_attempt(AuthState::Unauthenticated, &result);

    assert_eq!(result.unwrap_err().message, "Invalid credentials");
    assert_eq!(state, AuthState::Unauthenticated);
    assert!(memory.is_empty());
}

/// Tests that registration stores the returned session.
///
/// Expected: member registration endpoint used, session persisted
#[tokio::test]
async fn sign_up_persists_session() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);
    let mock = test
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/register/member/");
            then.status(201)
                .json_body(json!({"token": "new", "user": fixture::user::json()}));
        })
        .await;

    let user = sign_up(&api, &RegisterDto::default(), Role::Member)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        api.credentials().session(),
        Some(("new".to_string(), user))
    );
}

/// Tests that a failed user refresh signs out.
///
/// Expected: Err propagated, storage cleared
#[tokio::test]
async fn failed_reload_signs_out() {
    let test = TestBuilder::new()
        .with_session("abc123", fixture::user::json())
        .build()
        .await;
    let (api, memory) = client(&test);
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/auth/me/");
            then.status(500);
        })
        .await;

    let result = reload_user(&api).await;

    assert_eq!(result.unwrap_err().status, 500);
    assert!(memory.is_empty());
}

#[test]
fn role_checks_require_authentication() {
    let user: UserDto = serde_json::from_value(fixture::user::json()).unwrap();
    let state = AuthState::Authenticated(user);

    assert!(state.has_role(&[Role::Member, Role::Coordinator]));
    assert!(!state.has_role(&[Role::StudentLifeOfficer]));
    assert!(!AuthState::Unauthenticated.has_role(&Role::ALL));
    assert!(AuthState::Initializing.is_pending());
    assert!(AuthState::Authenticating.is_pending());
}

#[test]
fn rejected_token_during_restore_is_silent() {
    let user: UserDto = serde_json::from_value(fixture::user::json()).unwrap();

    assert!(!AuthState::Initializing.reports_expiry());
    assert!(AuthState::Authenticated(user).reports_expiry());
    assert!(AuthState::Authenticating.reports_expiry());
}
