//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and click counting
//! - [`PgUserRepository`] - Owner provisioning
//! - [`PgHealthRepository`] - Liveness probe

pub mod pg_health_repository;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_health_repository::PgHealthRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
