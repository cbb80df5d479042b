//! Link list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::web::WebState;

/// Template for the link-in-bio page.
///
/// Renders `templates/links.html`: the "add link" form, the link list with
/// click counters, and the script that talks to the API at `api_base_url`.
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub api_base_url: String,
}

/// Renders the link-in-bio page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Template
///
/// The page is a static shell; the link list is fetched by the browser from
/// `GET {api_base_url}/api/links` after load.
pub async fn links_page_handler(State(state): State<WebState>) -> impl IntoResponse {
    LinksTemplate {
        api_base_url: state.api_base_url.to_string(),
    }
}
