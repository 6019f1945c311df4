use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Number of price points retained per product unless overridden
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// Key under which the whole history table is stored
pub const DEFAULT_STORAGE_KEY: &str = "price_history";

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub test_before_acquire: bool,
}

/// Which key-value store backs the history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
    Postgres(DatabaseConfig),
}

impl StorageBackend {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File(_) => "file",
            StorageBackend::Postgres(_) => "postgres",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Convert from an environment value
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid LOG_FORMAT: {}. Must be one of: [\"text\", \"json\"]", s)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub storage_key: String,
    pub history_limit: usize,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl DatabaseConfig {
    /// Create database config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable is required for the postgres backend")?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);

        let acquire_timeout_secs = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let idle_timeout_secs = env::var("DATABASE_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(600); // 10 minutes

        let max_lifetime_secs = env::var("DATABASE_MAX_LIFETIME_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1800); // 30 minutes

        let test_before_acquire = env::var("DATABASE_TEST_BEFORE_ACQUIRE")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        if max_connections == 0 {
            return Err("DATABASE_MAX_CONNECTIONS must be greater than 0".to_string());
        }

        if acquire_timeout_secs == 0 {
            return Err("DATABASE_ACQUIRE_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(Self {
            url,
            max_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
            test_before_acquire,
        })
    }

    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Get idle timeout as Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Get max lifetime as Duration
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/price_tracker".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            test_before_acquire: true,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".to_string());
        let storage = match backend.to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "file" => {
                let path = env::var("STORAGE_PATH")
                    .unwrap_or_else(|_| "./data/price_history.json".to_string());
                StorageBackend::File(PathBuf::from(path))
            }
            "postgres" => StorageBackend::Postgres(DatabaseConfig::from_env()?),
            other => {
                return Err(format!(
                    "Invalid STORAGE_BACKEND: {}. Must be one of: [\"memory\", \"file\", \"postgres\"]",
                    other
                ))
            }
        };

        let storage_key =
            env::var("STORAGE_KEY").unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            return Err("STORAGE_KEY must not be empty".to_string());
        }

        let history_limit = match env::var("HISTORY_LIMIT") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("Invalid HISTORY_LIMIT: {}", raw))?,
            Err(_) => DEFAULT_HISTORY_LIMIT,
        };
        if history_limit == 0 {
            return Err("HISTORY_LIMIT must be greater than 0".to_string());
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) => LogFormat::from_str(&raw)?,
            Err(_) => LogFormat::Text,
        };

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        Ok(Self {
            storage,
            storage_key,
            history_limit,
            log_level: log_level.to_lowercase(),
            log_format,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_default() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.history_limit, 30);
        assert_eq!(config.storage_key, "price_history");
        assert_eq!(config.storage.name(), "memory");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("TEXT").unwrap(), LogFormat::Text);
        assert!(LogFormat::from_str("xml").is_err());
    }
}
