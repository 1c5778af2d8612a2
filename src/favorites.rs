//! Favorites subsystem.
//!
//! # Data Flow
//! ```text
//! POST   /users/{uid}/favorites/{kind}/{id}
//!     → user exists?           (404 "User not found")
//!     → target exists?         (404 "<Noun> not found")
//!     → already favorited?     (409 "<Noun> is already in favorites")
//!     → insert association row
//!
//! DELETE /users/{uid}/favorites/{kind}/{id}
//!     → user exists? → target exists?
//!     → association row exists? (404 "<Noun> not found")
//!     → delete association row
//! ```
//!
//! The first failing check decides the response. A concurrent duplicate
//! that slips past the check is caught by the UNIQUE constraint and
//! reported the same way.

use crate::error::{is_unique_violation, ApiError, ApiResult};
use crate::models::{FavoriteKind, UserFavorites};
use crate::store::Store;

const USER_NOT_FOUND: &str = "User not found";

/// Existence/duplicate checks in front of the association tables.
#[derive(Debug, Clone)]
pub struct FavoriteService {
    store: Store,
}

impl FavoriteService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Favorite `target_id` for `user_id`. Returns the new association id.
    pub async fn add(&self, kind: FavoriteKind, user_id: i64, target_id: i64) -> ApiResult<i64> {
        self.ensure_refs(kind, user_id, target_id).await?;

        if self
            .store
            .find_favorite(kind, user_id, target_id)
            .await?
            .is_some()
        {
            return Err(ApiError::conflict(kind.duplicate_msg()));
        }

        match self.store.insert_favorite(kind, user_id, target_id).await {
            Ok(id) => {
                tracing::info!(user_id, target_id, kind = ?kind, favorite_id = id, "Favorite added");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!(user_id, target_id, kind = ?kind, "Lost duplicate-favorite race");
                Err(ApiError::conflict(kind.duplicate_msg()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the (user, target) favorite.
    pub async fn remove(&self, kind: FavoriteKind, user_id: i64, target_id: i64) -> ApiResult<()> {
        self.ensure_refs(kind, user_id, target_id).await?;

        let favorite_id = self
            .store
            .find_favorite(kind, user_id, target_id)
            .await?
            .ok_or_else(|| ApiError::not_found(kind.not_found_msg()))?;

        // A concurrent delete may have won between lookup and delete.
        if !self.store.delete_favorite(kind, favorite_id).await? {
            return Err(ApiError::not_found(kind.not_found_msg()));
        }

        tracing::info!(user_id, target_id, kind = ?kind, favorite_id, "Favorite removed");
        Ok(())
    }

    /// Both favorite lists of a user.
    pub async fn list(&self, user_id: i64) -> ApiResult<UserFavorites> {
        if !self.store.user_exists(user_id).await? {
            return Err(ApiError::not_found(USER_NOT_FOUND));
        }

        Ok(UserFavorites {
            user_id,
            favorite_people: self.store.favorites_of(user_id).await?,
            favorite_planets: self.store.favorites_of(user_id).await?,
        })
    }

    async fn ensure_refs(&self, kind: FavoriteKind, user_id: i64, target_id: i64) -> ApiResult<()> {
        if !self.store.user_exists(user_id).await? {
            return Err(ApiError::not_found(USER_NOT_FOUND));
        }
        if !self.store.target_exists(kind, target_id).await? {
            return Err(ApiError::not_found(kind.not_found_msg()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::models::{NewPerson, NewPlanet};

    struct Fixture {
        service: FavoriteService,
        user: i64,
        person: i64,
        planet: i64,
    }

    async fn fixture() -> Fixture {
        let config = DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        };
        let store = Store::new(crate::db::connect(&config).await.unwrap());
        let user = store.create_user("luke@tatooine.net", true).await.unwrap().id;
        let person = store
            .create_person("Yoda", &NewPerson::default())
            .await
            .unwrap()
            .id;
        let planet = store
            .create_planet("Dagobah", &NewPlanet::default())
            .await
            .unwrap()
            .id;
        Fixture {
            service: FavoriteService::new(store),
            user,
            person,
            planet,
        }
    }

    #[tokio::test]
    async fn test_second_add_conflicts() {
        let f = fixture().await;
        f.service.add(FavoriteKind::Person, f.user, f.person).await.unwrap();

        let err = f
            .service
            .add(FavoriteKind::Person, f.user, f.person)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(ref m) if m == "Character is already in favorites"));
    }

    #[tokio::test]
    async fn test_check_order_user_first() {
        let f = fixture().await;

        let err = f.service.add(FavoriteKind::Planet, 999, 999).await.unwrap_err();
        assert_eq!(err.to_string(), "User not found");

        let err = f
            .service
            .add(FavoriteKind::Planet, f.user, 999)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Planet not found");
    }

    #[tokio::test]
    async fn test_remove_missing_favorite() {
        let f = fixture().await;
        let err = f
            .service
            .remove(FavoriteKind::Planet, f.user, f.planet)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "Planet not found"));

        f.service.add(FavoriteKind::Planet, f.user, f.planet).await.unwrap();
        f.service.remove(FavoriteKind::Planet, f.user, f.planet).await.unwrap();
        // Re-adding after removal is allowed.
        f.service.add(FavoriteKind::Planet, f.user, f.planet).await.unwrap();
    }

    #[tokio::test]
    async fn test_list() {
        let f = fixture().await;
        f.service.add(FavoriteKind::Person, f.user, f.person).await.unwrap();

        let favorites = f.service.list(f.user).await.unwrap();
        assert_eq!(favorites.user_id, f.user);
        assert_eq!(favorites.favorite_people.len(), 1);
        assert_eq!(favorites.favorite_people[0].name, "Yoda");
        assert!(favorites.favorite_planets.is_empty());

        assert!(matches!(f.service.list(404).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_yield_one_favorite() {
        let path = std::env::temp_dir().join(format!("starwars-api-race-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 5,
        };
        let store = Store::new(crate::db::connect(&config).await.unwrap());
        let user = store.create_user("rey@jakku.net", true).await.unwrap().id;
        let person = store
            .create_person("BB-8", &NewPerson::default())
            .await
            .unwrap()
            .id;
        let service = FavoriteService::new(store);

        let attempts: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.add(FavoriteKind::Person, user, person).await })
            })
            .collect();

        let mut added = 0;
        let mut conflicts = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => added += 1,
                Err(ApiError::Conflict(msg)) => {
                    assert_eq!(msg, "Character is already in favorites");
                    conflicts += 1;
                }
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
        assert_eq!((added, conflicts), (1, 15));

        let favorites = service.list(user).await.unwrap();
        assert_eq!(favorites.favorite_people.len(), 1);

        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
        }
    }
}
