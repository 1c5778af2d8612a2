//! Star Wars favorites API library.
//!
//! Users, people and planets over HTTP/JSON, with per-user favorites of
//! people and planets, stored in SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod favorites;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod observability;
pub mod store;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use http::ApiServer;
pub use lifecycle::Shutdown;
pub use store::Store;
