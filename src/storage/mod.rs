//! Key-value persistence behind the history table.
//!
//! The table lives under a single key as one JSON document; every backend
//! only has to support whole-document `get` and `set`.

pub mod file;
pub mod memory;
pub mod postgres;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::config::StorageBackend;
use crate::database::{create_pool, run_migrations};
use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Asynchronous key-value store holding JSON documents
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the document under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the document under `key`
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Build the store selected by configuration
pub async fn connect(backend: &StorageBackend) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    let store: Arc<dyn KeyValueStore> = match backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File(path) => Arc::new(FileStore::new(path.clone())),
        StorageBackend::Postgres(config) => {
            let pool = create_pool(config).await?;
            run_migrations(&pool).await?;
            Arc::new(PgStore::new(pool))
        }
    };
    Ok(store)
}
