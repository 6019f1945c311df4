use crate::error::{AppError, AppResult};
use crate::extract::{canonical_url, parse_price, resolve_product_id};
use crate::models::{Observation, ProductId};
use serde::{Deserialize, Serialize};

const UNKNOWN_TITLE: &str = "Unknown Product";

/// Raw fields scraped from a product page, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    pub url: String,
    pub price_text: Option<String>,
    pub title_text: Option<String>,
    /// Identifier found elsewhere on the page (e.g. a hidden form field)
    pub id_hint: Option<String>,
}

impl PageContext {
    /// Turn the scraped fields into a validated observation.
    ///
    /// Missing id or unparseable price is an `InvalidObservation`; a missing
    /// title falls back to a placeholder.
    pub fn into_observation(self, timestamp: i64) -> AppResult<(ProductId, Observation)> {
        let id = resolve_product_id(&self.url, self.id_hint.as_deref()).ok_or_else(|| {
            AppError::InvalidObservation(format!("no product id found for {}", self.url))
        })?;

        let price = self
            .price_text
            .as_deref()
            .and_then(parse_price)
            .ok_or_else(|| {
                AppError::InvalidObservation(format!("no price found for product {}", id))
            })?;

        let title = self
            .title_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let obs = Observation {
            price,
            timestamp,
            title,
            url: canonical_url(&self.url),
        };
        obs.validate()?;

        Ok((id, obs))
    }
}
