//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned, span opened)
//!     → extract.rs (path ids / JSON bodies, rejections as JSON errors)
//!     → people.rs / planets.rs / users.rs / favorites.rs (one store call)
//!     → response.rs (JSON envelope, error bodies from the layers)
//!     → Send to client
//! ```

pub mod extract;
pub mod favorites;
pub mod people;
pub mod planets;
pub mod request;
pub mod response;
pub mod server;
pub mod sitemap;
pub mod users;

pub use request::{MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use server::{ApiServer, ApiService, AppState};
