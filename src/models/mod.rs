//! Domain models for the price tracker.
//!
//! Persisted types (`HistoryTable`, `ProductRecord`, `PricePoint`) and the
//! derived `AnalysisResult`.

pub mod analysis;
pub mod page;
pub mod product;

// Re-export all models for convenient access
pub use analysis::{AnalysisResult, TrendStatus};
pub use page::PageContext;
pub use product::{HistoryTable, Observation, PricePoint, ProductId, ProductRecord};
