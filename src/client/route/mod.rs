pub mod club;
pub mod coordinator;
pub mod event;
pub mod home;
pub mod login;
pub mod membership;
pub mod not_found;
pub mod officer;
pub mod profile;
pub mod register;
pub mod unauthorized;

pub use home::Home;
pub use login::Login;
pub use membership::MyMemberships;
pub use not_found::NotFound;
pub use profile::Profile;
pub use register::Register;
pub use unauthorized::Unauthorized;
