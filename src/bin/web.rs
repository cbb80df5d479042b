//! Web client for link-in-bio.
//!
//! Serves the browser page that lists, creates, and opens links through the
//! API at `PUBLIC_API_URL`.
//!
//! # Usage
//!
//! ```bash
//! PUBLIC_API_URL=http://localhost:4000 cargo run --bin web
//! ```

use link_in_bio::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_web_from_env()?;
    telemetry::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run_web(config).await
}
