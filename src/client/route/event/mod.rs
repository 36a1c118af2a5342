pub mod detail;
pub mod form;
pub mod list;

pub use detail::EventDetail;
pub use form::{EventCreate, EventEdit};
pub use list::EventList;
