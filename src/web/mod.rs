//! Web client: the browser-facing link-in-bio page.
//!
//! Served by the `web` binary as a separate process. The page itself calls
//! the REST API; this layer only renders the shell with Askama and tells
//! the browser where the API lives.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;

use std::sync::Arc;

/// State shared by web client handlers.
#[derive(Clone)]
pub struct WebState {
    pub api_base_url: Arc<str>,
}

impl WebState {
    pub fn new(api_base_url: impl Into<Arc<str>>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }
}
