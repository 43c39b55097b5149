//! PostgreSQL repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;

use crate::domain::{Player, PlayerInput};
use crate::error::{CoreError, Result};
use crate::repository::PlayerRepository;

/// Player repository backed by the `players` table
#[derive(Clone)]
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Create a new repository over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn list(&self) -> Result<Vec<Player>> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, presence_date, presence_state
            FROM players
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    async fn get(&self, id: i32) -> Result<Player> {
        sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, presence_date, presence_state
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(CoreError::PlayerNotFound(id))
    }

    async fn create(&self, input: &PlayerInput) -> Result<Player> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO players (name, presence_date, presence_state)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.presence_date)
        .bind(&input.presence_state)
        .fetch_one(&self.pool)
        .await?;

        debug!(id, "Inserted player");
        Ok(input.clone().into_player(id))
    }

    async fn update(&self, id: i32, input: &PlayerInput) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $1, presence_date = $2, presence_state = $3
            WHERE id = $4
            "#,
        )
        .bind(&input.name)
        .bind(input.presence_date)
        .bind(&input.presence_state)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM players")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn test_unreachable_database_is_unavailable() {
        // Port 1 is never a PostgreSQL server.
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(500))
            .connect_lazy("postgres://postgres@127.0.0.1:1/postgres")
            .unwrap();
        let repo = PostgresPlayerRepository::new(pool);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, CoreError::StorageUnavailable(_)), "{err:?}");
    }
}
