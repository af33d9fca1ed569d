//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Where the post document is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Single JSON file on disk.
    File(PathBuf),
    /// Process memory only, nothing survives a restart.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    /// `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Maximum accepted JSON body size in bytes.
    pub json_body_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            store: Self::parse_store(
                env::var("STORE_BACKEND").ok().as_deref(),
                env::var("DB_FILE").ok(),
            ),
            cors_allowed_origins: Self::parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            json_body_limit: env::var("JSON_BODY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(64 * 1024),
        }
    }

    /// `STORE_BACKEND=memory` selects the in-memory backend; anything else
    /// falls back to the JSON file at `DB_FILE` (default `db.json`).
    fn parse_store(backend: Option<&str>, db_file: Option<String>) -> StoreConfig {
        match backend.map(|b| b.trim().to_lowercase()).as_deref() {
            Some("memory") => StoreConfig::Memory,
            Some("file") | None => StoreConfig::File(Self::db_path(db_file)),
            Some(other) => {
                tracing::warn!(backend = other, "Unknown STORE_BACKEND, using file");
                StoreConfig::File(Self::db_path(db_file))
            }
        }
    }

    fn db_path(db_file: Option<String>) -> PathBuf {
        db_file
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("db.json"))
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_defaults_to_file() {
        assert_eq!(
            AppConfig::parse_store(None, None),
            StoreConfig::File(PathBuf::from("db.json"))
        );
        assert_eq!(
            AppConfig::parse_store(Some("file"), Some("/var/lib/quickboard/db.json".into())),
            StoreConfig::File(PathBuf::from("/var/lib/quickboard/db.json"))
        );
    }

    #[test]
    fn test_store_memory() {
        assert_eq!(AppConfig::parse_store(Some("Memory"), None), StoreConfig::Memory);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            AppConfig::parse_origins("http://localhost:5173, https://board.example.com,,"),
            vec!["http://localhost:5173", "https://board.example.com"]
        );
    }
}
