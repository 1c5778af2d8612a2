use crate::models::{NewPlanet, Planet};
use crate::store::Store;

const PLANET_COLUMNS: &str = "id, name, climate, terrain, population, diameter";

impl Store {
    pub async fn list_planets(&self) -> sqlx::Result<Vec<Planet>> {
        sqlx::query_as::<_, Planet>(&format!("SELECT {PLANET_COLUMNS} FROM planets ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_planet(&self, id: i64) -> sqlx::Result<Option<Planet>> {
        sqlx::query_as::<_, Planet>(&format!("SELECT {PLANET_COLUMNS} FROM planets WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_planet(&self, name: &str, planet: &NewPlanet) -> sqlx::Result<Planet> {
        sqlx::query_as::<_, Planet>(&format!(
            "INSERT INTO planets (name, climate, terrain, population, diameter) \
             VALUES (?, ?, ?, ?, ?) RETURNING {PLANET_COLUMNS}"
        ))
        .bind(name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .bind(&planet.population)
        .bind(&planet.diameter)
        .fetch_one(&self.pool)
        .await
    }
}
