//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the API can reach its database.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: `SELECT 1` succeeded
/// - **503 Service Unavailable**: the database could not be queried
///
/// # Response
///
/// ```json
/// {
///   "status": "error",
///   "message": "Database connection failed",
///   "error": "pool timed out while waiting for an open connection"
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.health_service.check_database().await {
        Ok(()) => Ok(Json(HealthResponse::ok())),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::database_failed(e.to_string())),
            ))
        }
    }
}
