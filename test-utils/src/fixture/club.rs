//! Club fixtures shaped like `/api/clubs/` responses.

use serde_json::{json, Value};

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_NAME: &str = "Chess Club";
pub const DEFAULT_DESCRIPTION: &str =
    "Weekly casual games, monthly tournaments and lessons for players of every level.";
pub const DEFAULT_STATUS: &str = "active";
pub const DEFAULT_COORDINATOR: i32 = 2;

/// Creates an active club payload coordinated by user `2`.
pub fn json() -> Value {
    builder().build()
}

pub fn builder() -> ClubBuilder {
    ClubBuilder {
        id: DEFAULT_ID,
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        status: DEFAULT_STATUS.to_string(),
        coordinator: Some(DEFAULT_COORDINATOR),
    }
}

pub struct ClubBuilder {
    id: i32,
    name: String,
    description: String,
    status: String,
    coordinator: Option<i32>,
}

impl ClubBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn coordinator(mut self, coordinator: Option<i32>) -> Self {
        self.coordinator = coordinator;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "status": self.status,
            "coordinator": self.coordinator,
            "created_at": "2024-09-15T10:00:00Z",
            "creation_request": null,
        })
    }
}
