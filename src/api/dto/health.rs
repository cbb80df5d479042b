//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// `error` carries the database error message and is only present when the
/// check failed.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "API is healthy and connected to the database".to_string(),
            error: None,
        }
    }

    pub fn database_failed(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: "Database connection failed".to_string(),
            error: Some(error.into()),
        }
    }
}
