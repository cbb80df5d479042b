//! User entity: the owner of links.

use chrono::{DateTime, Utc};

/// An owner of links.
///
/// The service runs single-tenant; one configured user owns every link
/// created through the HTTP API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: String, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }
}

/// Input data for creating (or ensuring) a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: String,
    pub username: String,
}
