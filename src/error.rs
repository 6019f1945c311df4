use crate::database::DatabaseError;
use sqlx::Error as SqlxError;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed scrape result (empty id, negative or non-finite price)
    #[error("Invalid observation: {0}")]
    InvalidObservation(String),

    /// The key-value store could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// Trend analysis was asked to summarise a history with no points
    #[error("Cannot analyze an empty price history")]
    EmptyHistory,

    /// Not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if the caller may retry the whole operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }

    /// Check if error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidObservation(_) => 2,
            AppError::NotFound(_) => 3,
            AppError::Config(_) => 78,
            AppError::StorageUnavailable(_) => 74,
            AppError::EmptyHistory | AppError::Serialization(_) => 1,
        }
    }
}

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Postgres query error
    #[error("Query error: {0}")]
    Query(#[from] SqlxError),

    /// Pool creation or migration failure
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// The stored document is not valid JSON or not a history table
    #[error("Corrupt stored document under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
