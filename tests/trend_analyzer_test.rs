mod helpers;

use helpers::*;
use price_tracker::models::TrendStatus;
use price_tracker::services::analyze;
use price_tracker::AppError;

#[test]
fn test_price_drop() {
    let result = analyze(&history(&[10.00, 8.00])).unwrap();

    assert_eq!(result.status, TrendStatus::Dropped);
    assert_close(result.delta_abs.unwrap(), -2.0);
    assert_close(result.delta_percent.unwrap(), -20.0);
    assert_eq!(result.current_price, 8.0);
    assert_eq!(result.previous_price, Some(10.0));
}

#[test]
fn test_stable_price() {
    let result = analyze(&history(&[5.00, 5.00])).unwrap();

    assert_eq!(result.status, TrendStatus::Stable);
    assert_eq!(result.delta_abs, Some(0.0));
    assert_eq!(result.delta_percent, Some(0.0));
}

#[test]
fn test_single_point_is_insufficient_data() {
    let result = analyze(&history(&[12.34])).unwrap();

    assert_eq!(result.status, TrendStatus::InsufficientData);
    assert_eq!(result.current_price, 12.34);
    assert_eq!(result.previous_price, None);
    assert_eq!(result.delta_abs, None);
    assert_eq!(result.delta_percent, None);
    assert_eq!(result.lowest, 12.34);
    assert_eq!(result.highest, 12.34);
    assert_eq!(result.sample_count, 1);
}

#[test]
fn test_extremes_cover_whole_window() {
    let result = analyze(&history(&[10.0, 7.0, 12.0, 9.0])).unwrap();

    assert_eq!(result.lowest, 7.0);
    assert_eq!(result.highest, 12.0);
    assert_eq!(result.sample_count, 4);
    assert_eq!(result.status, TrendStatus::Dropped);
    assert_eq!(result.previous_price, Some(12.0));
}

#[test]
fn test_zero_previous_price_has_no_percent() {
    let result = analyze(&history(&[0.0, 5.0])).unwrap();

    assert_eq!(result.status, TrendStatus::Increased);
    assert_eq!(result.delta_abs, Some(5.0));
    assert_eq!(result.delta_percent, None);
}

#[test]
fn test_empty_history_is_an_error() {
    assert!(matches!(analyze(&[]), Err(AppError::EmptyHistory)));
}

#[test]
fn test_deltas_are_not_rounded() {
    let result = analyze(&history(&[3.0, 1.0])).unwrap();
    assert_close(result.delta_percent.unwrap(), -200.0 / 3.0);
}

#[test]
fn test_analysis_json_uses_screaming_status() {
    let result = analyze(&history(&[12.34])).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], "INSUFFICIENT_DATA");
    assert!(value["previousPrice"].is_null());
    assert_eq!(value["sampleCount"], 1);
}
