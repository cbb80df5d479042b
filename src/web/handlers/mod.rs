//! HTML template rendering handlers for the web client.

mod links;

pub use links::{LinksTemplate, links_page_handler};
