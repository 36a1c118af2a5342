//! Event fixtures shaped like `/api/events/` responses.
//!
//! Default times are relative to now so the event is always upcoming.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

pub const DEFAULT_ID: i32 = 1;
pub const DEFAULT_CLUB: i32 = 1;
pub const DEFAULT_TITLE: &str = "Autumn Tournament";
pub const DEFAULT_DESCRIPTION: &str = "Swiss format, five rounds, open to all members.";
pub const DEFAULT_LOCATION: &str = "Library, Room 2";
pub const DEFAULT_CREATED_BY: i32 = 2;

/// Creates a public upcoming event for club `1`, starting in seven days and lasting two hours.
pub fn json() -> Value {
    builder().build()
}

pub fn builder() -> EventBuilder {
    let start_time = Utc::now() + Duration::days(7);

    EventBuilder {
        id: DEFAULT_ID,
        club: DEFAULT_CLUB,
        title: DEFAULT_TITLE.to_string(),
        start_time,
        end_time: start_time + Duration::hours(2),
        event_type: "public".to_string(),
        status: "upcoming".to_string(),
        created_by: DEFAULT_CREATED_BY,
    }
}

pub struct EventBuilder {
    id: i32,
    club: i32,
    title: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    event_type: String,
    status: String,
    created_by: i32,
}

impl EventBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn club(mut self, club: i32) -> Self {
        self.club = club;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the start time, keeping the event's duration.
    pub fn starts_at(mut self, start_time: DateTime<Utc>) -> Self {
        let duration = self.end_time - self.start_time;
        self.start_time = start_time;
        self.end_time = start_time + duration;
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_by(mut self, created_by: i32) -> Self {
        self.created_by = created_by;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "club": self.club,
            "title": self.title,
            "description": DEFAULT_DESCRIPTION,
            "start_time": self.start_time.to_rfc3339(),
            "end_time": self.end_time.to_rfc3339(),
            "location": DEFAULT_LOCATION,
            "event_type": self.event_type,
            "status": self.status,
            "created_by": self.created_by,
        })
    }
}
