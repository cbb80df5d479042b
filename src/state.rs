//! Shared state injected into API handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{HealthService, LinkService};
use crate::infrastructure::persistence::{PgHealthRepository, PgLinkRepository};

/// State shared by all API handlers.
///
/// Built once by the process entry point from an explicitly constructed
/// pool. `owner_id` is the owner every HTTP request acts on.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub health_service: Arc<HealthService<PgHealthRepository>>,
    pub owner_id: Arc<str>,
}

impl AppState {
    /// Wires repositories and services on top of `pool`.
    pub fn new(pool: Arc<PgPool>, owner_id: impl Into<Arc<str>>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let health_repository = Arc::new(PgHealthRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            health_service: Arc::new(HealthService::new(health_repository)),
            owner_id: owner_id.into(),
        }
    }
}
