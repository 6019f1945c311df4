//! Price Tracker Library
//!
//! Bounded per-product price history with trend analysis. Raw page
//! observations go in through `PriceTrackingService`; `AnalysisResult`s come
//! out for whatever renders them.

pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod models;
pub mod repositories;
pub mod services;
pub mod storage;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repositories::HistoryStore;
use services::PriceTrackingService;
use std::sync::Arc;
use storage::KeyValueStore;

/// Application state containing the history store and tracking service
pub struct AppState {
    pub history: Arc<HistoryStore>,
    pub tracker: Arc<PriceTrackingService>,
}

impl AppState {
    /// Wire the history store and service over an already-connected backend
    pub fn new(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let history = Arc::new(HistoryStore::with_options(
            store,
            config.storage_key.clone(),
            config.history_limit,
        ));

        Self {
            tracker: Arc::new(PriceTrackingService::new(history.clone())),
            history,
        }
    }

    /// Connect the configured backend and build the state
    pub async fn connect(config: &AppConfig) -> AppResult<Self> {
        let store = storage::connect(&config.storage).await?;
        Ok(Self::new(store, config))
    }
}
