//! Plain-text rendering of an analysis, for terminals and logs.
//!
//! All rounding to display precision happens here.

use crate::models::{AnalysisResult, PricePoint, TrendStatus};
use chrono::{TimeZone, Utc};

/// One-line description of the latest price move
pub fn headline(analysis: &AnalysisResult) -> String {
    let percent = analysis
        .delta_percent
        .map(|p| format!(" ({:.1}%)", p.abs()))
        .unwrap_or_default();
    let delta = analysis.delta_abs.unwrap_or_default().abs();

    match analysis.status {
        TrendStatus::InsufficientData => "Tracking started".to_string(),
        TrendStatus::Dropped => format!("Price dropped ${:.2}{}", delta, percent),
        TrendStatus::Increased => format!("Price increased ${:.2}{}", delta, percent),
        TrendStatus::Stable => format!("Price stable at ${:.2}", analysis.current_price),
    }
}

/// Multi-line summary: title, current price, headline and window stats
pub fn render_summary(title: &str, analysis: &AnalysisResult) -> String {
    let plural = if analysis.sample_count == 1 { "" } else { "s" };
    format!(
        "{title}\n\
         Current price: ${current:.2}\n\
         {headline}\n\
         Lowest seen:   ${lowest:.2}\n\
         Highest seen:  ${highest:.2}\n\
         Tracking for {count} observation{plural}",
        title = title,
        current = analysis.current_price,
        headline = headline(analysis),
        lowest = analysis.lowest,
        highest = analysis.highest,
        count = analysis.sample_count,
        plural = plural,
    )
}

/// Newest-first listing, one `YYYY-MM-DD: $X.XX` line per point
pub fn render_history(history: &[PricePoint]) -> String {
    history
        .iter()
        .rev()
        .map(|p| format!("{}: ${:.2}", format_date(p.timestamp), p.price))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_date(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("@{}", timestamp_ms))
}
