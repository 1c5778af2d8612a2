//! Star Wars favorites API (v1)
//!
//! A CRUD service over users, people, planets and per-user favorites,
//! built with Tokio, Axum and sqlx.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ───────────────▶ request id ─▶ trace ─▶ timeout ─▶ body limit
//!                                                         │
//!                                                         ▼
//!                                          ┌─────────────────────────────┐
//!                                          │  http handlers (one/route)  │
//!                                          └──────┬───────────────┬──────┘
//!                                                 │               │
//!                                                 ▼               │
//!                                          favorites checks       │
//!                                                 │               │
//!                                                 ▼               ▼
//!                                          ┌─────────────────────────────┐
//!                                          │     store (sqlx, SQLite)    │
//!                                          └─────────────────────────────┘
//!   Client Response ◀──── JSON body / {"msg": ...} envelope
//! ```

use std::path::PathBuf;

use clap::Parser;

use starwars_api::config::load_config;
use starwars_api::lifecycle::{start, Shutdown};
use starwars_api::observability::logging;

#[derive(Parser)]
#[command(name = "starwars-api")]
#[command(about = "CRUD API for Star Wars people, planets and user favorites", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init(&config.observability)?;

    tracing::info!("starwars-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_url = %config.database.url,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    let (server, listener) = start(config).await?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
