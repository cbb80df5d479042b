//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link listing, creation, and click recording
//! - [`services::user_service::UserService`] - Owner provisioning
//! - [`services::health_service::HealthService`] - Database liveness check

pub mod services;
