#![allow(dead_code)]

use price_tracker::models::{Observation, PricePoint, ProductId};
use price_tracker::repositories::HistoryStore;
use price_tracker::services::PriceTrackingService;
use price_tracker::storage::{FileStore, KeyValueStore, MemoryStore};
use std::path::Path;
use std::sync::Arc;

/// Base timestamp for fixtures: 2024-01-01T00:00:00Z
pub const BASE_TS: i64 = 1_704_067_200_000;
pub const DAY_MS: i64 = 86_400_000;

/// Test store wiring: backend, history store and service sharing one backend
pub struct TestStore {
    pub backend: Arc<dyn KeyValueStore>,
    pub history: Arc<HistoryStore>,
    pub tracker: PriceTrackingService,
}

impl TestStore {
    /// Create an in-memory test store
    pub fn memory() -> Self {
        Self::from_backend(Arc::new(MemoryStore::new()))
    }

    /// Create a test store persisting to a JSON file
    pub fn file(path: &Path) -> Self {
        Self::from_backend(Arc::new(FileStore::new(path.to_path_buf())))
    }

    pub fn from_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let history = Arc::new(HistoryStore::new(backend.clone()));
        Self {
            backend,
            tracker: PriceTrackingService::new(history.clone()),
            history,
        }
    }

    /// Record one observation per price, one day apart
    pub async fn record_prices(&self, id: &ProductId, prices: &[f64]) {
        for (i, &price) in prices.iter().enumerate() {
            self.history
                .upsert_observation(id, &observation(price, day(i as i64)))
                .await
                .expect("Failed to record observation");
        }
    }
}

pub fn product_id(raw: &str) -> ProductId {
    ProductId::new(raw).expect("Invalid test product id")
}

pub fn day(n: i64) -> i64 {
    BASE_TS + n * DAY_MS
}

/// Observation with fixed title and url
pub fn observation(price: f64, timestamp: i64) -> Observation {
    observation_with(price, timestamp, "Electric Kettle", "https://shop.example/dp/B08N5WRWNW")
}

pub fn observation_with(price: f64, timestamp: i64, title: &str, url: &str) -> Observation {
    Observation {
        price,
        timestamp,
        title: title.to_string(),
        url: url.to_string(),
    }
}

/// History with one point per price, one day apart
pub fn history(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint {
            price,
            timestamp: day(i as i64),
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be within 1e-9 of {}",
        actual,
        expected
    );
}
