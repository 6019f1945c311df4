use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identifier of a tracked product (e.g. a retailer SKU)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a ProductId, rejecting empty or whitespace-only input
    pub fn new(id: impl Into<String>) -> AppResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(AppError::InvalidObservation(
                "product id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One raw scrape result; folded into a PricePoint, never stored as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub price: f64,
    pub timestamp: i64, // epoch milliseconds
    pub title: String,
    pub url: String,
}

impl Observation {
    /// Reject prices that must never reach the store
    pub fn validate(&self) -> AppResult<()> {
        if !self.price.is_finite() {
            return Err(AppError::InvalidObservation(format!(
                "price must be finite, got {}",
                self.price
            )));
        }
        if self.price < 0.0 {
            return Err(AppError::InvalidObservation(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        Ok(())
    }

    pub fn to_price_point(&self) -> PricePoint {
        PricePoint {
            price: self.price,
            timestamp: self.timestamp,
        }
    }
}

/// A retained (price, timestamp) sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: i64,
}

/// Persisted title/url/history for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub history: Vec<PricePoint>,
}

impl ProductRecord {
    /// Start a record from the first observation seen for a product
    pub fn from_observation(obs: &Observation) -> Self {
        Self {
            title: obs.title.clone(),
            url: obs.url.clone(),
            history: Vec::new(),
        }
    }

    /// Append a point and drop the oldest ones beyond `limit`
    pub fn push_point(&mut self, point: PricePoint, limit: usize) {
        self.history.push(point);
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }
}

/// The whole persisted state: `{ "products": { <id>: ProductRecord } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryTable {
    #[serde(default)]
    pub products: BTreeMap<ProductId, ProductRecord>,
}

impl HistoryTable {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fold an observation into the table, creating the record on first sight.
    /// Title and url of an existing record are left untouched.
    pub fn record(&mut self, id: ProductId, obs: &Observation, limit: usize) -> &ProductRecord {
        let record = self
            .products
            .entry(id)
            .or_insert_with(|| ProductRecord::from_observation(obs));
        record.push_point(obs.to_price_point(), limit);
        record
    }
}
