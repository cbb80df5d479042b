mod common;

use link_in_bio::AppError;
use link_in_bio::domain::entities::NewUser;
use link_in_bio::domain::repositories::UserRepository;
use link_in_bio::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(id: &str, username: &str) -> NewUser {
    NewUser {
        id: id.to_string(),
        username: username.to_string(),
    }
}

#[sqlx::test]
async fn test_upsert_creates_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo
        .upsert(new_user(common::OWNER_ID, common::OWNER_USERNAME))
        .await
        .unwrap();

    assert_eq!(user.id, common::OWNER_ID);
    assert_eq!(user.username, common::OWNER_USERNAME);
}

#[sqlx::test]
async fn test_upsert_is_idempotent(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    let first = repo
        .upsert(new_user(common::OWNER_ID, common::OWNER_USERNAME))
        .await
        .unwrap();
    let second = repo
        .upsert(new_user(common::OWNER_ID, "renamed"))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.username, common::OWNER_USERNAME);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_upsert_username_taken(pool: PgPool) {
    common::create_test_user(&pool, "first", "taken").await;
    let repo = PgUserRepository::new(Arc::new(pool));

    let result = repo.upsert(new_user("second", "taken")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}
