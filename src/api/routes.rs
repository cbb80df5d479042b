//! API route configuration.

use crate::api::handlers::{
    create_link_handler, health_handler, list_links_handler, record_click_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET  /health`            - Database liveness check
/// - `GET  /links`             - List the owner's links, newest first
/// - `POST /links`             - Create a link
/// - `POST /links/{id}/click`  - Record a click
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/{id}/click", post(record_click_handler))
}
