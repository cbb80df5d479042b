//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a link.
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error (400) rather than a deserialization
/// failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL must not be empty")
    )]
    pub url: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            clicks: link.clicks,
            created_at: link.created_at,
            owner_id: link.owner_id,
        }
    }
}

/// Acknowledgement returned after a click was recorded.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub message: String,
}
