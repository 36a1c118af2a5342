//! Club creation request fixtures shaped like `/api/clubs/requests/` responses.

use serde_json::{json, Value};

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_CLUB_NAME: &str = "Astronomy Club";
pub const DEFAULT_DESCRIPTION: &str =
    "Night sky observation sessions, telescope workshops and talks from visiting researchers.";
pub const DEFAULT_COORDINATOR: i32 = 2;
pub const DEFAULT_SUBMITTED_AT: &str = "2024-10-01T09:00:00Z";

/// Creates a pending request payload submitted by user `2`.
pub fn json() -> Value {
    builder().build()
}

pub fn builder() -> ClubRequestBuilder {
    ClubRequestBuilder {
        id: DEFAULT_ID,
        club_name: DEFAULT_CLUB_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        status: "pending".to_string(),
        coordinator: DEFAULT_COORDINATOR,
        comment: None,
        submitted_at: DEFAULT_SUBMITTED_AT.to_string(),
    }
}

pub struct ClubRequestBuilder {
    id: i32,
    club_name: String,
    description: String,
    status: String,
    coordinator: i32,
    comment: Option<String>,
    submitted_at: String,
}

impl ClubRequestBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn club_name(mut self, club_name: impl Into<String>) -> Self {
        self.club_name = club_name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn coordinator(mut self, coordinator: i32) -> Self {
        self.coordinator = coordinator;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the RFC 3339 submission timestamp.
    pub fn submitted_at(mut self, submitted_at: impl Into<String>) -> Self {
        self.submitted_at = submitted_at.into();
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "club_name": self.club_name,
            "description": self.description,
            "status": self.status,
            "coordinator": self.coordinator,
            "student_life_officer_comment": self.comment,
            "submitted_at": self.submitted_at,
        })
    }
}
