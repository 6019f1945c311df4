use super::KeyValueStore;
use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

/// Store backed by the `kv_store` table (see `migrations/`)
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a new PgStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PgStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let row: Option<(Json<Value>,)> = sqlx::query_as(
            r#"
            SELECT value
            FROM kv_store
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(Json(value),)| value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(Json(value))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
