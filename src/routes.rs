//! Top-level routers for the API service and the web client.
//!
//! # API Route Structure
//!
//! - `GET  /api/health`            - Database liveness check
//! - `GET  /api/links`             - List links
//! - `POST /api/links`             - Create a link
//! - `POST /api/links/{id}/click`  - Record a click
//!
//! # Middleware
//!
//! - **CORS** - Any origin may call the API from a browser
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web::{self, WebState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the API router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the web client router.
pub fn web_router(state: WebState) -> NormalizePath<Router> {
    let router = web::routes::routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
