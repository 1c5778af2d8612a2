//! Startup orchestration.
//!
//! Brings subsystems up in dependency order and hands back a server that
//! is ready to run on an already-bound listener.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ApiConfig;
use crate::db;
use crate::http::ApiServer;
use crate::observability::metrics;
use crate::store::Store;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("metrics exporter failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("database unavailable: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Initialize metrics, open the database and bind the listener.
pub async fn start(config: ApiConfig) -> Result<(ApiServer, TcpListener), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let pool = db::connect(&config.database).await?;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let local_addr = listener.local_addr().map_err(|source| StartupError::Bind {
        address: config.listener.bind_address.clone(),
        source,
    })?;
    tracing::info!(address = %local_addr, "Listening for connections");

    Ok((ApiServer::new(&config, Store::new(pool)), listener))
}
