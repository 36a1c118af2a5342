pub mod auth;
pub mod cache;
pub mod club;
pub mod error;
pub mod event;
pub mod form;
pub mod notification;
pub mod request;
