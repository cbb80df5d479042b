//! Database liveness check.

use std::sync::Arc;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// Service behind the health endpoint.
pub struct HealthService<H: HealthRepository> {
    health_repository: Arc<H>,
}

impl<H: HealthRepository> HealthService<H> {
    /// Creates a new health service.
    pub fn new(health_repository: Arc<H>) -> Self {
        Self { health_repository }
    }

    /// Checks that the database answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns the repository error, whose message describes why the
    /// database could not be reached.
    pub async fn check_database(&self) -> Result<(), AppError> {
        self.health_repository.ping().await
    }
}
