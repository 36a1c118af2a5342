//! Membership fixtures shaped like `/api/memberships/` responses.

use serde_json::{json, Value};

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_USER: i32 = 1;
pub const DEFAULT_CLUB: i32 = 1;

/// Creates an active `member` membership of user `1` in club `1`.
pub fn json() -> Value {
    builder().build()
}

pub fn builder() -> MembershipBuilder {
    MembershipBuilder {
        id: DEFAULT_ID,
        user: DEFAULT_USER,
        club: DEFAULT_CLUB,
        role: "member".to_string(),
        status: "active".to_string(),
    }
}

pub struct MembershipBuilder {
    id: i32,
    user: i32,
    club: i32,
    role: String,
    status: String,
}

impl MembershipBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user(mut self, user: i32) -> Self {
        self.user = user;
        self
    }

    pub fn club(mut self, club: i32) -> Self {
        self.club = club;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the wire status: `pending` memberships are membership requests.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "user": self.user,
            "club": self.club,
            "role": self.role,
            "status": self.status,
            "joined_at": "2024-09-20T12:00:00Z",
        })
    }
}
