//! Web client route configuration.

use crate::web::WebState;
use crate::web::handlers::links_page_handler;
use axum::{Router, routing::get};

/// Routes of the web client.
///
/// # Endpoints
///
/// - `GET /` - Link-in-bio page
pub fn routes() -> Router<WebState> {
    Router::new().route("/", get(links_page_handler))
}
