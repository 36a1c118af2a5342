use super::*;
use crate::{
    client::api::auth::{current_user, login, logout, register, register_path},
    model::user::{LoginDto, RegisterDto, Role},
};

/// Tests logging in with valid credentials.
///
/// Expected: Ok with the token and user returned by the backend
#[tokio::test]
async fn login_returns_token_and_user() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);

    let mock = test
        .server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login/")
                .json_body(json!({"username": "ada", "password": "Secret123"}));
            then.status(200)
                .json_body(json!({"token": "abc123", "user": fixture::user::json()}));
        })
        .await;

    let response = login(
        &api,
        &LoginDto {
            username: "ada".to_string(),
            password: "Secret123".to_string(),
        },
    )
    .await
    .unwrap();

    mock.assert_async().await;
    assert_eq!(response.token, "abc123");
    assert_eq!(response.user.role, Role::Member);
}

/// Tests that rejected credentials carry the backend's message.
///
/// Expected: Err with status 400 and the server message
#[tokio::test]
async fn login_reports_server_message() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login/");
            then.status(400)
                .json_body(json!({"error": "Invalid credentials"}));
        })
        .await;

    let err = login(&api, &LoginDto::default()).await.unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Invalid credentials");
}

/// Tests that each role registers through its own endpoint.
///
/// Expected: officer registration goes to the `rva` path
#[tokio::test]
async fn registers_officer_under_rva_path() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);
    let officer = fixture::user::builder()
        .role("student_life_officer")
        .build();

    let mock = test
        .server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/register/rva/");
            then.status(201)
                .json_body(json!({"token": "t0k", "user": officer}));
        })
        .await;

    let response = register(&api, &RegisterDto::default(), Role::StudentLifeOfficer)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.user.role, Role::StudentLifeOfficer);
    assert_eq!(register_path(Role::Member), "/auth/register/member/");
    assert_eq!(register_path(Role::Coordinator), "/auth/register/coordinator/");
}

/// Tests fetching the signed-in user with the stored token.
///
/// Expected: Ok with the user
#[tokio::test]
async fn fetches_current_user() {
    let test = signed_in().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/auth/me/")
                .header("Authorization", "Token abc123");
            then.status(200).json_body(fixture::user::json());
        })
        .await;

    let user = current_user(&api).await.unwrap();

    assert_eq!(user.username, fixture::user::DEFAULT_USERNAME);
}

/// Tests that logging out clears the stored token and user.
///
/// Expected: storage emptied
#[tokio::test]
async fn logout_clears_storage() {
    let test = signed_in().await;
    let (api, memory) = client(&test);

    logout(&api);

    assert!(memory.is_empty());
    assert_eq!(api.credentials().token(), None);
}
