//! Database connection and schema bootstrap.
//!
//! # Design Decisions
//! - One `SqlitePool` shared by every handler (cloned through app state)
//! - Schema is `CREATE ... IF NOT EXISTS`, applied on every start
//! - In-memory databases are private per connection, so their pool is
//!   pinned to a single long-lived connection

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseConfig;

const SCHEMA: &str = include_str!("schema.sql");

/// Open the pool described by `config` and make sure the schema exists.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.url,
        max_connections = pool.options().get_max_connections(),
        "Connected to database"
    );

    apply_schema(&pool).await?;
    Ok(pool)
}

/// Execute every statement of the bundled schema.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt).execute(pool).await?;
        }
    }

    tracing::debug!("Schema applied");
    Ok(())
}
