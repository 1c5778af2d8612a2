//! Characters ("people").

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

/// Body of `POST /people`. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}
