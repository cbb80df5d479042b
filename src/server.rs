//! HTTP server initialization and runtime setup.
//!
//! Owns the lifecycle of the database pool: it is created here, handed to
//! the repositories, and closed once the server has shut down.

use crate::application::services::UserService;
use crate::config::{Config, WebConfig};
use crate::infrastructure::persistence::PgUserRepository;
use crate::routes::{app_router, web_router};
use crate::state::AppState;
use crate::web::WebState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Builds the PostgreSQL pool from configuration.
///
/// # Errors
///
/// Returns an error if the database cannot be reached.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Runs the API server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Default owner (idempotent upsert)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The default owner cannot be provisioned
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);

    let user_service = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let owner = user_service
        .ensure_user(&config.default_owner_id, &config.default_owner_username)
        .await
        .context("Failed to provision default owner")?;
    tracing::info!(owner_id = %owner.id, username = %owner.username, "Default user is ready");

    let state = AppState::new(pool.clone(), owner.id);
    let app = app_router(state);

    let listener = bind(&config.listen_addr).await?;
    tracing::info!("API server is running on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Runs the web client server with the given configuration.
///
/// # Errors
///
/// Returns an error if the server cannot bind or fails at runtime.
pub async fn run_web(config: WebConfig) -> Result<()> {
    let app = web_router(WebState::new(config.api_base_url));

    let listener = bind(&config.listen_addr).await?;
    tracing::info!("Web client is running on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn bind(listen_addr: &str) -> Result<TcpListener> {
    TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
