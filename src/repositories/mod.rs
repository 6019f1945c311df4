pub mod history_repository;

// Re-export all repositories for convenient access
pub use history_repository::HistoryStore;
