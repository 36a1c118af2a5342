//! Club factory for creating distinct club payloads.

use serde_json::Value;

use crate::{factory::helpers::next_id, fixture};

/// Creates an active club payload with a unique id and name.
pub fn create_club() -> Value {
    let id = next_id();
    fixture::club::builder()
        .id(id)
        .name(format!("Club {}", id))
        .build()
}

/// Creates `count` distinct club payloads.
pub fn create_clubs(count: usize) -> Vec<Value> {
    (0..count).map(|_| create_club()).collect()
}
