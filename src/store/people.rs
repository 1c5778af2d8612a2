use crate::models::{NewPerson, Person};
use crate::store::Store;

const PERSON_COLUMNS: &str = "id, name, gender, birth_year, height, hair_color, eye_color";

impl Store {
    pub async fn list_people(&self) -> sqlx::Result<Vec<Person>> {
        sqlx::query_as::<_, Person>(&format!("SELECT {PERSON_COLUMNS} FROM people ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_person(&self, id: i64) -> sqlx::Result<Option<Person>> {
        sqlx::query_as::<_, Person>(&format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a person. `name` is passed separately, already validated.
    pub async fn create_person(&self, name: &str, person: &NewPerson) -> sqlx::Result<Person> {
        sqlx::query_as::<_, Person>(&format!(
            "INSERT INTO people (name, gender, birth_year, height, hair_color, eye_color) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {PERSON_COLUMNS}"
        ))
        .bind(name)
        .bind(&person.gender)
        .bind(&person.birth_year)
        .bind(&person.height)
        .bind(&person.hair_color)
        .bind(&person.eye_color)
        .fetch_one(&self.pool)
        .await
    }
}
