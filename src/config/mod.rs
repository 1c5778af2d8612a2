//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → ApiConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the service starts with no file at all
//! - `DATABASE_URL` and `PORT` win over the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    ApiConfig, DatabaseConfig, ListenerConfig, LogFormat, ObservabilityConfig, SecurityConfig,
    TimeoutConfig,
};
