pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod format;
pub mod model;
pub mod route;
pub mod router;
pub mod storage;
pub mod validation;

pub use app::App;
