//! Factory methods for creating distinct test records.
//!
//! Fixtures always reuse the same ids. Factories build on them and hand out a unique id to each
//! record, which tests need when a mocked list must hold several clubs, events or requests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let clubs = factory::club::create_clubs(8);
//! let event = factory::event::create_event(1);
//! ```
//!
//! # Available Factories
//!
//! - `club` - Active clubs with unique ids and names
//! - `club_request` - Pending requests with unique ids and increasing submission times
//! - `event` - Upcoming events for a given club
//! - `helpers` - Shared id generation

pub mod club;
pub mod club_request;
pub mod event;
pub mod helpers;

pub use club::{create_club, create_clubs};
pub use club_request::{create_request, create_requests};
pub use event::{create_event, create_events};
