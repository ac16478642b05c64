//! Application configuration constants.
//!
//! Centralizes the tunable values of the engine so the grading, scheduling
//! and session modules never carry magic numbers of their own.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from("data/kelimeler.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Grading Configuration ====================

/// Similarity ratio at or above which a non-exact answer is accepted
pub const FUZZY_THRESHOLD: f64 = 0.88;

/// Normalized answers at or below this many characters only match exactly;
/// edit-distance ratios are unreliable on very short strings
pub const FUZZY_MIN_LEN: usize = 3;

// ==================== Leitner Configuration ====================

/// Lowest and highest Leitner box
pub const BOX_MIN: u8 = 1;
pub const BOX_MAX: u8 = 5;

/// Review interval in days for boxes 1-5 (box 1 is due immediately)
pub const LEITNER_INTERVALS_DAYS: [i64; 5] = [0, 1, 3, 7, 14];

// ==================== Session Configuration ====================

/// Bounds for the question count of a review run
pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 100;

/// Fallback when the requested question count is malformed
pub const DEFAULT_QUESTIONS: usize = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_parsing() {
        let config: AppConfig =
            toml::from_str("[database]\npath = \"/tmp/words.db\"\n").unwrap();
        assert_eq!(config.database.unwrap().path.as_deref(), Some("/tmp/words.db"));
    }

    #[test]
    fn test_config_toml_without_database_section() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn test_interval_table_shape() {
        assert_eq!(LEITNER_INTERVALS_DAYS.len(), (BOX_MAX - BOX_MIN + 1) as usize);
        assert_eq!(LEITNER_INTERVALS_DAYS[0], 0);
        assert_eq!(LEITNER_INTERVALS_DAYS[4], 14);
    }
}
