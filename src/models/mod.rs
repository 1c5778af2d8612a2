//! Row and payload types for every table.
//!
//! Rows derive `sqlx::FromRow` for mapping and `Serialize` for the JSON
//! responses; `New*` payloads derive `Deserialize` for request bodies.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

pub use favorite::{Favorite, FavoriteKind, FavoritePerson, FavoritePlanet, UserFavorites};
pub use person::{NewPerson, Person};
pub use planet::{NewPlanet, Planet};
pub use user::{NewUser, User};

use crate::error::{ApiError, ApiResult};

/// Require a non-blank string field from a request body, trimmed.
pub fn required<'a>(field: &str, value: Option<&'a str>) -> ApiResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("'{}' is required", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(required("name", Some("  Luke ")).unwrap(), "Luke");
        assert!(required("name", Some("   ")).is_err());
        let err = required("email", None).unwrap_err();
        assert_eq!(err.to_string(), "'email' is required");
    }
}
