//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for links.
///
/// Every operation is scoped to an owner id; a link owned by someone else is
/// invisible to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link with a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including an owner
    /// id that does not reference an existing user.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Lists all links of an owner, newest first.
    ///
    /// Links created at the same instant are ordered by id, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Link>, AppError>;

    /// Atomically adds one to the click counter of a link.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the link exists for this owner and was incremented
    /// - `Ok(false)` if no such link exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_clicks(&self, id: i64, owner_id: &str) -> Result<bool, AppError>;
}
