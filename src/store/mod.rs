//! Persistence operations, one query per call.
//!
//! `Store` wraps the shared `SqlitePool`; each table's queries live in
//! their own file as an `impl Store` block. Methods return `sqlx::Result`
//! and leave the HTTP meaning of a missing row to the caller.

mod favorites;
mod people;
mod planets;
mod users;

use sqlx::SqlitePool;

/// Handle to the database, cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
