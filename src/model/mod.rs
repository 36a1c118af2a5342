pub mod api;
pub mod club;
pub mod event;
pub mod membership;
pub mod user;
