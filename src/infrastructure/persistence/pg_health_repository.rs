//! PostgreSQL liveness probe.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// Runs `SELECT 1` against the pool.
pub struct PgHealthRepository {
    pool: Arc<PgPool>,
}

impl PgHealthRepository {
    /// Creates a new probe with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| AppError::unavailable(e.to_string(), Value::Null))?;

        Ok(())
    }
}
