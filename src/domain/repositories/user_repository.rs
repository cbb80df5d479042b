//! Repository trait for user (link owner) data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link owners.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user if no user with the same id exists and returns the
    /// stored row. An existing user is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username belongs to another id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn upsert(&self, new_user: NewUser) -> Result<User, AppError>;
}
