pub mod detail;
pub mod form;
pub mod list;
pub mod request_form;

pub use detail::ClubDetail;
pub use form::{ClubCreate, ClubEdit};
pub use list::ClubList;
pub use request_form::ClubRequestForm;
