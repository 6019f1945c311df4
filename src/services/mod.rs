pub mod summary;
pub mod tracking_service;
pub mod trend_analyzer;

pub use tracking_service::{PriceTrackingService, TrackingReport};
pub use trend_analyzer::analyze;
