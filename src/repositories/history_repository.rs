use crate::config::{DEFAULT_HISTORY_LIMIT, DEFAULT_STORAGE_KEY};
use crate::error::{AppResult, StorageError};
use crate::models::{HistoryTable, Observation, ProductId, ProductRecord};
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Owner of the persisted HistoryTable.
///
/// Every upsert is a full read-modify-write of the table under one key.
/// Upserts through the same `HistoryStore` are serialized; separate
/// instances pointed at the same backend are not coordinated.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
    limit: usize,
    upsert_lock: Mutex<()>,
}

impl HistoryStore {
    /// Create a HistoryStore with the default key and a 30-point window
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_options(store, DEFAULT_STORAGE_KEY, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a HistoryStore with an explicit storage key and window size.
    /// A `limit` of zero is treated as one.
    pub fn with_options(store: Arc<dyn KeyValueStore>, key: impl Into<String>, limit: usize) -> Self {
        Self {
            store,
            key: key.into(),
            limit: limit.max(1),
            upsert_lock: Mutex::new(()),
        }
    }

    /// Fold one observation into the product's history and persist the table
    pub async fn upsert_observation(
        &self,
        id: &ProductId,
        obs: &Observation,
    ) -> AppResult<ProductRecord> {
        obs.validate()?;

        let _guard = self.upsert_lock.lock().await;

        let mut table = self.load_table().await?;
        let record = table.record(id.clone(), obs, self.limit).clone();
        self.save_table(&table).await?;

        info!(
            "Recorded price {} for product {} ({} points retained)",
            obs.price,
            id,
            record.history.len()
        );

        Ok(record)
    }

    /// Look up a product; `Ok(None)` when it has never been observed
    pub async fn get_history(&self, id: &ProductId) -> AppResult<Option<ProductRecord>> {
        let mut table = self.load_table().await?;
        Ok(table.products.remove(id))
    }

    /// All tracked product ids, sorted
    pub async fn product_ids(&self) -> AppResult<Vec<ProductId>> {
        let table = self.load_table().await?;
        Ok(table.products.into_keys().collect())
    }

    /// Load the whole table, or an empty one on first run
    pub async fn load_table(&self) -> AppResult<HistoryTable> {
        let Some(value) = self.store.get(&self.key).await? else {
            debug!("No history stored under '{}', starting empty", self.key);
            return Ok(HistoryTable::default());
        };

        let table: HistoryTable =
            serde_json::from_value(value).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })?;
        debug!("Loaded history for {} products", table.len());
        Ok(table)
    }

    async fn save_table(&self, table: &HistoryTable) -> AppResult<()> {
        let value = serde_json::to_value(table)?;
        self.store.set(&self.key, value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::MemoryStore;
    use serde_json::json;

    fn obs(price: f64, timestamp: i64) -> Observation {
        Observation {
            price,
            timestamp,
            title: "Kettle".to_string(),
            url: "https://shop.example/dp/B00TEST123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_observation_is_not_persisted() {
        let backend = Arc::new(MemoryStore::new());
        let store = HistoryStore::new(backend.clone());
        let id = ProductId::new("B00TEST123").unwrap();

        let result = store.upsert_observation(&id, &obs(-1.0, 1)).await;
        assert!(matches!(result, Err(AppError::InvalidObservation(_))));
        assert!(backend.get(DEFAULT_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_storage_unavailable() {
        let backend = Arc::new(MemoryStore::with_entry(
            DEFAULT_STORAGE_KEY,
            json!({"products": {"B00TEST123": "not a record"}}),
        ));
        let store = HistoryStore::new(backend);
        let id = ProductId::new("B00TEST123").unwrap();

        let err = store.get_history(&id).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let store = HistoryStore::with_options(Arc::new(MemoryStore::new()), "custom", 3);
        let id = ProductId::new("B00TEST123").unwrap();
        for ts in 0..5 {
            store.upsert_observation(&id, &obs(ts as f64, ts)).await.unwrap();
        }

        let record = store.get_history(&id).await.unwrap().unwrap();
        assert_eq!(record.history.len(), 3);
        assert_eq!(record.history[0].timestamp, 2);
    }
}
