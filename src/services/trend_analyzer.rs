use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, PricePoint, TrendStatus};

/// Summarise a product's price history.
///
/// The last two points give the trend; lowest and highest cover the whole
/// retained window. Values are returned unrounded.
///
/// # Errors
/// `EmptyHistory` if `history` has no points.
pub fn analyze(history: &[PricePoint]) -> AppResult<AnalysisResult> {
    let current = history.last().ok_or(AppError::EmptyHistory)?;

    let (lowest, highest) = history
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });

    let previous = history.len().checked_sub(2).map(|i| &history[i]);

    let Some(previous) = previous else {
        return Ok(AnalysisResult {
            status: TrendStatus::InsufficientData,
            current_price: current.price,
            previous_price: None,
            delta_abs: None,
            delta_percent: None,
            lowest,
            highest,
            sample_count: history.len(),
        });
    };

    let delta = current.price - previous.price;

    // Zero previous price has no meaningful percentage
    let delta_percent = if previous.price == 0.0 {
        None
    } else {
        Some(delta / previous.price * 100.0)
    };

    Ok(AnalysisResult {
        status: TrendStatus::from_delta(delta),
        current_price: current.price,
        previous_price: Some(previous.price),
        delta_abs: Some(delta),
        delta_percent,
        lowest,
        highest,
        sample_count: history.len(),
    })
}
