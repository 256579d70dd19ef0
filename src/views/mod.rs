pub mod dashboard;
pub mod dashboard_redirect;
pub mod landing;
