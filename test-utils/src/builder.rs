use httpmock::MockServer;
use serde_json::Value;

use crate::context::TestContext;

/// Builder for creating test contexts around a mock backend.
///
/// Starts with no stored session. Use `with_session()` to simulate a user who signed in during
/// an earlier visit, then call `build()` to start the mock server.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_session("abc123", fixture::user::json())
///     .build()
///     .await;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    token: Option<String>,
    user: Option<Value>,
}

impl TestBuilder {
    /// Creates a new test builder with no stored session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the stored token and user JSON the client finds on startup.
    ///
    /// # Arguments
    /// - `token` - Auth token the client attaches as `Authorization: Token <token>`
    /// - `user` - User payload as the backend returns it from `/auth/me/`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_session(mut self, token: &str, user: Value) -> Self {
        self.token = Some(token.to_string());
        self.user = Some(user);
        self
    }

    /// Seeds only a token, leaving the stored user missing.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Starts the mock server and returns the configured context.
    pub async fn build(self) -> TestContext {
        let server = MockServer::start_async().await;

        TestContext {
            server,
            token: self.token,
            user: self.user,
        }
    }
}
