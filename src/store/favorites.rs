use crate::models::{Favorite, FavoriteKind};
use crate::store::Store;

// Table and column names come from `FavoriteKind`, never from input.
impl Store {
    pub async fn target_exists(&self, kind: FavoriteKind, id: i64) -> sqlx::Result<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", kind.target_table());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.is_some())
    }

    /// Id of the (user, target) association row, if any.
    pub async fn find_favorite(
        &self,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> sqlx::Result<Option<i64>> {
        let sql = format!(
            "SELECT id FROM {} WHERE user_id = ? AND {} = ?",
            kind.table(),
            kind.target_column()
        );
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id)
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert an association row and return its id.
    pub async fn insert_favorite(
        &self,
        kind: FavoriteKind,
        user_id: i64,
        target_id: i64,
    ) -> sqlx::Result<i64> {
        let sql = format!(
            "INSERT INTO {} (user_id, {}) VALUES (?, ?)",
            kind.table(),
            kind.target_column()
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(target_id)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete an association row by id. Returns false when nothing matched.
    pub async fn delete_favorite(&self, kind: FavoriteKind, id: i64) -> sqlx::Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every favorite of one kind for a user, with the target's name.
    pub async fn favorites_of<F: Favorite>(&self, user_id: i64) -> sqlx::Result<Vec<F>> {
        let kind = F::KIND;
        let sql = format!(
            "SELECT f.id, f.user_id, f.{col}, t.name FROM {fav} f \
             JOIN {target} t ON t.id = f.{col} \
             WHERE f.user_id = ? ORDER BY f.id",
            col = kind.target_column(),
            fav = kind.table(),
            target = kind.target_table(),
        );
        sqlx::query_as::<_, F>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }
}
