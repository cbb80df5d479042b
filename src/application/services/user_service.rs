//! Owner provisioning.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for link owners.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Makes sure a user with the given id exists.
    ///
    /// Idempotent: calling it again with the same id returns the stored user
    /// without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id or username is blank.
    /// Returns [`AppError::Conflict`] if the username is taken by another id.
    pub async fn ensure_user(&self, id: &str, username: &str) -> Result<User, AppError> {
        if id.trim().is_empty() || username.trim().is_empty() {
            return Err(AppError::bad_request(
                "User id and username are required",
                json!({ "id": id, "username": username }),
            ));
        }

        self.user_repository
            .upsert(NewUser {
                id: id.to_string(),
                username: username.to_string(),
            })
            .await
    }
}
