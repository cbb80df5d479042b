//! Cross-origin access for the browser client.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows `GET` and `POST` with a JSON body from any origin.
///
/// The web client is served from its own origin and calls the API directly.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
