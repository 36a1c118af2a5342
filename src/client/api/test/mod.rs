use httpmock::prelude::*;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory, fixture};

use crate::client::{
    api::helper::ApiClient,
    config::Config,
    storage::{CredentialStore, KeyValueStore, MemoryStore, AUTH_TOKEN_KEY, USER_DATA_KEY},
};

mod auth;
mod dashboard;
mod helper;

/// Builds a client pointed at the context's mock server, with the context's session seeded into
/// an in-memory store. The store is returned so tests can inspect what the client persisted.
fn client(test: &TestContext) -> (ApiClient, MemoryStore) {
    let memory = MemoryStore::new();
    if let Some(token) = &test.token {
        memory.set(AUTH_TOKEN_KEY, token);
    }
    if let Some(user) = test.stored_user() {
        memory.set(USER_DATA_KEY, &user);
    }

    let config = Config::with_base_url(&test.base_url()).unwrap();
    let api = ApiClient::new(&config, CredentialStore::new(memory.clone()));

    (api, memory)
}

/// Starts a mock backend with a signed-in member whose token is `abc123`.
async fn signed_in() -> TestContext {
    TestBuilder::new()
        .with_session("abc123", fixture::user::json())
        .build()
        .await
}
