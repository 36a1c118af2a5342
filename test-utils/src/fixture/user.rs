//! User fixtures shaped like `/auth/me/` responses.

use serde_json::{json, Value};

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_USERNAME: &str = "ada";
pub const DEFAULT_EMAIL: &str = "ada@example.org";
pub const DEFAULT_FIRST_NAME: &str = "Ada";
pub const DEFAULT_LAST_NAME: &str = "Lovelace";
pub const DEFAULT_ROLE: &str = "member";

/// Creates a member user payload with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"ada"`
/// - email: `"ada@example.org"`
/// - first_name / last_name: `"Ada"` / `"Lovelace"`
/// - role: `"member"`
pub fn json() -> Value {
    builder().build()
}

/// Creates a builder for a user payload with custom values.
pub fn builder() -> UserBuilder {
    UserBuilder {
        id: DEFAULT_ID,
        username: DEFAULT_USERNAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        role: DEFAULT_ROLE.to_string(),
    }
}

pub struct UserBuilder {
    id: i32,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
}

impl UserBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the wire value of the role: `member`, `coordinator` or `student_life_officer`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "role": self.role,
            "profile_picture": null,
            "date_joined": "2024-09-01T08:00:00Z",
            "is_active": true,
        })
    }
}
