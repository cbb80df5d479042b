mod common;

use chrono::{Duration, Utc};
use link_in_bio::domain::entities::NewLink;
use link_in_bio::domain::repositories::LinkRepository;
use link_in_bio::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::task::JoinSet;

fn new_link(title: &str, owner_id: &str) -> NewLink {
    NewLink {
        title: title.to_string(),
        url: "https://example.com".to_string(),
        owner_id: owner_id.to_string(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.create(new_link("Blog", common::OWNER_ID)).await.unwrap();

    assert!(link.id > 0);
    assert_eq!(link.title, "Blog");
    assert_eq!(link.url, "https://example.com");
    assert_eq!(link.clicks, 0);
    assert_eq!(link.owner_id, common::OWNER_ID);
}

#[sqlx::test]
async fn test_create_link_unknown_owner(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("Blog", "nobody")).await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_list_by_owner_ordering(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let now = Utc::now();

    let old = common::create_link_at(&pool, common::OWNER_ID, "old", now - Duration::days(1)).await;
    let new = common::create_link_at(&pool, common::OWNER_ID, "new", now).await;
    // Same timestamp as `new`: the higher id comes first.
    let tie = common::create_link_at(&pool, common::OWNER_ID, "tie", now).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let ids: Vec<i64> = repo
        .list_by_owner(common::OWNER_ID)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();

    assert_eq!(ids, vec![tie, new, old]);
}

#[sqlx::test]
async fn test_list_by_owner_unknown_owner(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let links = repo.list_by_owner("nobody").await.unwrap();

    assert!(links.is_empty());
}

#[sqlx::test]
async fn test_increment_clicks(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let id = common::create_test_link(&pool, common::OWNER_ID, "a", "https://a.com").await;

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    assert!(repo.increment_clicks(id, common::OWNER_ID).await.unwrap());
    assert!(repo.increment_clicks(id, common::OWNER_ID).await.unwrap());

    assert_eq!(common::get_clicks(&pool, id).await, 2);
}

#[sqlx::test]
async fn test_increment_clicks_missing(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(!repo.increment_clicks(424242, common::OWNER_ID).await.unwrap());
}

#[sqlx::test]
async fn test_increment_clicks_wrong_owner(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let id = common::create_test_link(&pool, common::OWNER_ID, "a", "https://a.com").await;

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    assert!(!repo.increment_clicks(id, "someone-else").await.unwrap());
    assert_eq!(common::get_clicks(&pool, id).await, 0);
}

#[sqlx::test]
async fn test_increment_clicks_concurrent(pool: PgPool) {
    common::create_default_owner(&pool).await;
    let id = common::create_test_link(&pool, common::OWNER_ID, "hot", "https://hot.com").await;

    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    let mut tasks = JoinSet::new();
    for _ in 0..100 {
        let repo = repo.clone();
        tasks.spawn(async move { repo.increment_clicks(id, common::OWNER_ID).await });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().unwrap());
    }

    assert_eq!(common::get_clicks(&pool, id).await, 100);
}
