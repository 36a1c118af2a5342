//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique ids in tests.
static COUNTER: AtomicU64 = AtomicU64::new(100);

/// Gets the next unique counter value for test data.
///
/// Starts above the fixtures' fixed ids so factory records never collide with them.
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, Ordering::SeqCst) as i32
}
