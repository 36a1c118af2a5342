//! Event factory for creating distinct event payloads.

use chrono::{Duration, Utc};
use serde_json::Value;

use crate::{factory::helpers::next_id, fixture};

/// Creates an upcoming event of `club` with a unique id and title.
pub fn create_event(club: i32) -> Value {
    let id = next_id();
    fixture::event::builder()
        .id(id)
        .club(club)
        .title(format!("Event {}", id))
        .build()
}

/// Creates `count` upcoming events of `club`, each starting one day after the previous one.
pub fn create_events(club: i32, count: usize) -> Vec<Value> {
    (0..count)
        .map(|offset| {
            let id = next_id();
            fixture::event::builder()
                .id(id)
                .club(club)
                .title(format!("Event {}", id))
                .starts_at(Utc::now() + Duration::days(offset as i64 + 1))
                .build()
        })
        .collect()
}
