//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for link owners.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn upsert(&self, new_user: NewUser) -> Result<User, AppError> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET username = users.username
            RETURNING id, username, created_at
            "#,
        )
        .bind(&new_user.id)
        .bind(&new_user.username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(User::new(row.id, row.username, row.created_at))
    }
}
