//! Favorite associations between users and people/planets.
//!
//! Both association tables share one shape (`id`, `user_id`, target id), so
//! the favorites flows are written once against [`FavoriteKind`], which
//! carries the table and column names and the user-facing wording.

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow};

/// The entity types a user can favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Person,
    Planet,
}

impl FavoriteKind {
    /// Association table.
    pub const fn table(self) -> &'static str {
        match self {
            FavoriteKind::Person => "fav_people",
            FavoriteKind::Planet => "fav_planets",
        }
    }

    /// Table of the favorited entity.
    pub const fn target_table(self) -> &'static str {
        match self {
            FavoriteKind::Person => "people",
            FavoriteKind::Planet => "planets",
        }
    }

    /// Column of the association table referencing the target.
    pub const fn target_column(self) -> &'static str {
        match self {
            FavoriteKind::Person => "people_id",
            FavoriteKind::Planet => "planets_id",
        }
    }

    /// Noun used in response messages.
    pub const fn noun(self) -> &'static str {
        match self {
            FavoriteKind::Person => "Character",
            FavoriteKind::Planet => "Planet",
        }
    }

    pub fn not_found_msg(self) -> String {
        format!("{} not found", self.noun())
    }

    pub fn duplicate_msg(self) -> String {
        format!("{} is already in favorites", self.noun())
    }

    pub fn added_msg(self) -> String {
        format!("{} added to favorites", self.noun())
    }

    pub fn deleted_msg(self) -> String {
        format!("{} deleted from favorites", self.noun())
    }
}

/// A favorite row type that can be loaded generically by kind.
pub trait Favorite: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin {
    const KIND: FavoriteKind;
}

/// A person favorited by a user, with the person's name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FavoritePerson {
    pub id: i64,
    pub user_id: i64,
    pub people_id: i64,
    pub name: String,
}

impl Favorite for FavoritePerson {
    const KIND: FavoriteKind = FavoriteKind::Person;
}

/// A planet favorited by a user, with the planet's name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FavoritePlanet {
    pub id: i64,
    pub user_id: i64,
    pub planets_id: i64,
    pub name: String,
}

impl Favorite for FavoritePlanet {
    const KIND: FavoriteKind = FavoriteKind::Planet;
}

/// Body of `GET /users/{id}/favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFavorites {
    pub user_id: i64,
    pub favorite_people: Vec<FavoritePerson>,
    pub favorite_planets: Vec<FavoritePlanet>,
}
