use httpmock::MockServer;
use serde_json::Value;

/// Test context containing the mock backend and the session seeded into client storage.
///
/// The mock server lives as long as the context; dropping the context shuts it down.
pub struct TestContext {
    /// Mock backend every request of the test is sent to.
    pub server: MockServer,

    /// Token seeded under the `auth_token` storage key, if any.
    pub token: Option<String>,

    /// User seeded under the `user_data` storage key, if any.
    pub user: Option<Value>,
}

impl TestContext {
    /// Base URL of the mock backend with a trailing slash, ready to be used as the API base.
    pub fn base_url(&self) -> String {
        self.server.url("/")
    }

    /// The seeded user serialized the way the client stores it.
    pub fn stored_user(&self) -> Option<String> {
        self.user.as_ref().map(Value::to_string)
    }

    /// Expected `Authorization` header value for the seeded token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Token {}", token))
    }
}
