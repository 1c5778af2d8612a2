use crate::models::User;
use crate::store::Store;

impl Store {
    pub async fn list_users(&self) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT id, email, is_active FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_user(&self, id: i64) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT id, email, is_active FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn user_exists(&self, id: i64) -> sqlx::Result<bool> {
        Ok(self.get_user(id).await?.is_some())
    }

    /// Insert a user. Fails with a unique violation when the email is taken.
    pub async fn create_user(&self, email: &str, is_active: bool) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, is_active) VALUES (?, ?) RETURNING id, email, is_active",
        )
        .bind(email)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await
    }
}
