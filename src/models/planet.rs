//! Planets.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

/// Body of `POST /planets`. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}
