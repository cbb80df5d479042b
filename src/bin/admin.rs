//! CLI administration tool for link-in-bio.
//!
//! Provides commands for provisioning owners, inspecting links, and
//! performing database operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Make sure the default owner exists
//! cargo run --bin admin -- user ensure
//!
//! # List the default owner's links
//! cargo run --bin admin -- links list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`, `DB_USER`, ...): PostgreSQL connection
//! - `DEFAULT_OWNER_ID`, `DEFAULT_OWNER_USERNAME`: defaults for `--owner`, `--id`, `--username`

use link_in_bio::application::services::{LinkService, UserService};
use link_in_bio::config::{self, DEFAULT_OWNER_ID, DEFAULT_OWNER_USERNAME};
use link_in_bio::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-in-bio.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage link owners
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Show link and click totals for an owner
    Stats {
        /// Owner id (defaults to DEFAULT_OWNER_ID)
        #[arg(short, long, env = "DEFAULT_OWNER_ID", default_value = DEFAULT_OWNER_ID)]
        owner: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Owner management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create the owner if it does not exist yet
    Ensure {
        /// Owner id
        #[arg(short, long, env = "DEFAULT_OWNER_ID", default_value = DEFAULT_OWNER_ID)]
        id: String,

        /// Owner username
        #[arg(
            short,
            long,
            env = "DEFAULT_OWNER_USERNAME",
            default_value = DEFAULT_OWNER_USERNAME
        )]
        username: String,
    },
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List an owner's links, newest first
    List {
        /// Owner id
        #[arg(short, long, env = "DEFAULT_OWNER_ID", default_value = DEFAULT_OWNER_ID)]
        owner: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await,
        Commands::Links { action } => handle_links_action(action, &pool).await,
        Commands::Stats { owner } => handle_stats(&owner, &pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;

    result
}

/// Dispatches owner management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = UserService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::Ensure { id, username } => {
            println!("{}", "Ensure owner".bright_blue().bold());
            println!();

            let user = service
                .ensure_user(&id, &username)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to ensure owner: {}", e))?;

            println!("  ID:       {}", user.id.cyan());
            println!("  Username: {}", user.username.cyan());
            println!(
                "  Created:  {}",
                user.created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            println!();
            println!("{}", "Owner is ready".green().bold());
        }
    }

    Ok(())
}

/// Dispatches link inspection commands.
async fn handle_links_action(action: LinksAction, pool: &PgPool) -> Result<()> {
    let service = link_service(pool);

    match action {
        LinksAction::List { owner } => {
            println!("{}", "Links".bright_blue().bold());
            println!();

            let links = service
                .list_links(&owner)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

            if links.is_empty() {
                println!("{}", "  No links found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<30} {:<8} {:<20} {}",
                "ID".bright_white().bold(),
                "Title".bright_white().bold(),
                "Clicks".bright_white().bold(),
                "Created".bright_white().bold(),
                "URL".bright_white().bold()
            );
            println!("  {}", "-".repeat(90).bright_black());

            for link in &links {
                println!(
                    "  {:<6} {:<30} {:<8} {:<20} {}",
                    link.id.to_string().bright_black(),
                    link.title.cyan(),
                    link.clicks.to_string().green(),
                    link.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    link.url
                );
            }

            println!();
            println!("  Total: {}", links.len().to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}

/// Displays link and click totals for an owner.
async fn handle_stats(owner: &str, pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let summary = link_service(pool)
        .summary(owner)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!("  Owner:  {}", owner.cyan());
    println!(
        "  Links:  {}",
        summary.links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        summary.clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}

fn link_service(pool: &PgPool) -> LinkService<PgLinkRepository> {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}
