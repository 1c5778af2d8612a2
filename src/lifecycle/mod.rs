//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Metrics exporter → Database pool + schema → Bind listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C or Shutdown::trigger → stop accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when the database is ready)

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{start, StartupError};
