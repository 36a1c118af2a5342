pub mod card;
pub mod form;
pub mod header;
pub mod layout;
pub mod modal;
pub mod notification;
pub mod page;
pub mod protected_layout;

pub use card::{ClubCard, EventCard, RequestCard};
pub use form::{SelectField, SubmitButton, SubmitError, TextArea, TextField};
pub use header::Header;
pub use layout::Layout;
pub use modal::{CommentModal, ConfirmationModal};
pub use notification::NotificationBanner;
pub use page::{ErrorAlert, ErrorPage, LoadingPage, Page};
pub use protected_layout::{
    RequiresCoordinator, RequiresManager, RequiresLoggedIn, RequiresMember, RequiresOfficer,
};
