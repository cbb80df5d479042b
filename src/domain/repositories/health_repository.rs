//! Repository trait for database liveness probing.

use crate::error::AppError;
use async_trait::async_trait;

/// Probes whether the backing store answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] carrying the driver message when the
    /// database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
