//! Club request factory for creating distinct pending requests.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::{factory::helpers::next_id, fixture};

/// Creates a pending request with a unique id, submitted at `submitted_at`.
pub fn create_request(submitted_at: DateTime<Utc>) -> Value {
    let id = next_id();
    fixture::club_request::builder()
        .id(id)
        .club_name(format!("Requested Club {}", id))
        .submitted_at(submitted_at.to_rfc3339())
        .build()
}

/// Creates `count` pending requests, the first submitted `count` hours ago and each later one an
/// hour after the previous.
pub fn create_requests(count: usize) -> Vec<Value> {
    let start = Utc::now() - Duration::hours(count as i64);
    (0..count)
        .map(|offset| create_request(start + Duration::hours(offset as i64)))
        .collect()
}
