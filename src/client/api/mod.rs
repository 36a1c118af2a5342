pub mod auth;
pub mod club;
pub mod club_request;
pub mod dashboard;
pub mod event;
pub mod helper;
pub mod membership;
pub mod user;

pub use helper::ApiClient;

#[cfg(test)]
mod test;
