// src/settings.rs
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LOG_FILE: &str = "logs/avm.log";

/// Process-wide configuration, read once at startup and passed by reference
/// to whatever needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Build settings from the process environment. A `.env` file, when
    /// present, is merged in first; absent variables fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_level =
            env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Self {
            log_level,
            log_file: PathBuf::from(log_file),
        }
    }
}
