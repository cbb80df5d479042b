//! Business logic services for the application layer.

pub mod health_service;
pub mod link_service;
pub mod user_service;

pub use health_service::HealthService;
pub use link_service::LinkService;
pub use user_service::UserService;
