//! Test fixtures providing backend payloads as JSON.
//!
//! Each fixture mirrors what the REST backend returns for one resource. Use `json()` for the
//! default payload and `builder()` to override individual fields. Fixtures always use the same
//! ids; use the `factory` module when a test needs several distinct records.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let member = fixture::user::json();
//!
//! let officer = fixture::user::builder()
//!     .role("student_life_officer")
//!     .build();
//! ```

pub mod club;
pub mod club_request;
pub mod event;
pub mod membership;
pub mod user;

pub use club::{builder as club_builder, json as club_json};
pub use club_request::{builder as club_request_builder, json as club_request_json};
pub use event::{builder as event_builder, json as event_json};
pub use membership::{builder as membership_builder, json as membership_json};
pub use user::{builder as user_builder, json as user_json};
