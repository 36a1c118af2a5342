pub mod dashboard;
pub mod requests;

pub use dashboard::OfficerDashboard;
pub use requests::ClubRequests;
