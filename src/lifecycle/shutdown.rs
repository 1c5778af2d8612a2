//! Shutdown coordination.

use tokio::sync::broadcast;

/// Broadcast trigger for graceful shutdown.
///
/// Every server started with a receiver from the same coordinator stops
/// when it fires. Tests use it to stop the servers they spawn.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop. Returns how many were notified.
    pub fn trigger(&self) -> usize {
        match self.tx.send(()) {
            Ok(servers) => {
                tracing::info!(servers, "Shutdown requested");
                servers
            }
            Err(_) => {
                tracing::debug!("Shutdown requested with no server running");
                0
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
