use serde::{Deserialize, Serialize};

/// Direction of the most recent price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendStatus {
    /// Only one sample so far
    InsufficientData,
    Stable,
    Dropped,
    Increased,
}

impl TrendStatus {
    /// Classify a price delta by its sign
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            TrendStatus::Dropped
        } else if delta > 0.0 {
            TrendStatus::Increased
        } else {
            TrendStatus::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStatus::InsufficientData => "INSUFFICIENT_DATA",
            TrendStatus::Stable => "STABLE",
            TrendStatus::Dropped => "DROPPED",
            TrendStatus::Increased => "INCREASED",
        }
    }
}

/// Trend summary derived on demand from a product's history. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub status: TrendStatus,
    pub current_price: f64,
    pub previous_price: Option<f64>,
    pub delta_abs: Option<f64>,
    /// `None` when there is no previous price or it was zero
    pub delta_percent: Option<f64>,
    pub lowest: f64,
    pub highest: f64,
    pub sample_count: usize,
}
