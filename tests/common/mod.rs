#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use link_in_bio::api;
use link_in_bio::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const OWNER_ID: &str = "clxkhm94y0000111122223333";
pub const OWNER_USERNAME: &str = "default-user";

pub async fn create_test_user(pool: &PgPool, id: &str, username: &str) {
    sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
        .bind(id)
        .bind(username)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_default_owner(pool: &PgPool) {
    create_test_user(pool, OWNER_ID, OWNER_USERNAME).await;
}

pub async fn create_test_link(pool: &PgPool, owner_id: &str, title: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO links (title, url, owner_id) VALUES ($1, $2, $3) RETURNING id")
        .bind(title)
        .bind(url)
        .bind(owner_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_link_at(
    pool: &PgPool,
    owner_id: &str,
    title: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (title, url, owner_id, created_at) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(title)
    .bind("https://example.com")
    .bind(owner_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_clicks(pool: &PgPool, link_id: i64, clicks: i64) {
    sqlx::query("UPDATE links SET clicks = $1 WHERE id = $2")
        .bind(clicks)
        .bind(link_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), OWNER_ID)
}

/// API routes as mounted under `/api` in production.
pub fn create_test_app(pool: PgPool) -> Router {
    Router::new()
        .nest("/api", api::routes::routes())
        .with_state(create_test_state(pool))
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(create_test_app(pool)).unwrap()
}
