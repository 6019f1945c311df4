use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, Observation, PageContext, ProductId, ProductRecord};
use crate::repositories::HistoryStore;
use crate::services::trend_analyzer;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// What a renderer needs after a page visit: the stored record and its trend
#[derive(Debug, Clone, Serialize)]
pub struct TrackingReport {
    pub product_id: ProductId,
    pub record: ProductRecord,
    pub analysis: AnalysisResult,
}

/// Service tying scraped observations to history and trend analysis
pub struct PriceTrackingService {
    history: Arc<HistoryStore>,
}

impl PriceTrackingService {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    /// Persist an observation and analyse the updated history
    pub async fn record_observation(
        &self,
        id: &ProductId,
        obs: &Observation,
    ) -> AppResult<TrackingReport> {
        let record = self.history.upsert_observation(id, obs).await?;
        let analysis = trend_analyzer::analyze(&record.history)?;

        info!(
            "Product {} is {} at {} ({} samples)",
            id,
            analysis.status.as_str(),
            analysis.current_price,
            analysis.sample_count
        );

        Ok(TrackingReport {
            product_id: id.clone(),
            record,
            analysis,
        })
    }

    /// Validate raw page fields, then record them
    pub async fn record_page(&self, page: PageContext, timestamp: i64) -> AppResult<TrackingReport> {
        let (id, obs) = page.into_observation(timestamp).map_err(|e| {
            warn!("Skipping page: {}", e);
            e
        })?;
        self.record_observation(&id, &obs).await
    }

    /// Analyse a stored product without recording anything
    pub async fn report(&self, id: &ProductId) -> AppResult<Option<TrackingReport>> {
        let Some(record) = self.history.get_history(id).await? else {
            return Ok(None);
        };

        let analysis = trend_analyzer::analyze(&record.history)?;
        Ok(Some(TrackingReport {
            product_id: id.clone(),
            record,
            analysis,
        }))
    }

    /// Like `report`, but a missing product is a `NotFound` error
    pub async fn require_report(&self, id: &ProductId) -> AppResult<TrackingReport> {
        self.report(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {} is not tracked", id)))
    }
}
