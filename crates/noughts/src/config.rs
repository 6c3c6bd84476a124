//! Application configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file, `NOUGHTS_*` environment variables (a `.env` file is loaded by
//! the binary), and command-line flags.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::store::DEFAULT_PROFILE;

/// Environment variable overriding [`AppConfig::db_path`].
pub const ENV_DB_PATH: &str = "NOUGHTS_DB_PATH";
/// Environment variable overriding [`AppConfig::profile`].
pub const ENV_PROFILE: &str = "NOUGHTS_PROFILE";
/// Environment variable overriding [`AppConfig::log_file`].
pub const ENV_LOG_FILE: &str = "NOUGHTS_LOG_FILE";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the preferences.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Profile name the tally and theme are stored under.
    #[serde(default = "default_profile")]
    profile: String,

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: String,
}

fn default_db_path() -> String {
    "noughts.db".to_string()
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

fn default_log_file() -> String {
    "noughts.log".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            profile: default_profile(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML for this shape.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, profile = %config.profile, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a given file cannot be read or parsed.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Applies overrides looked up by environment variable name.
    #[instrument(skip(self, lookup))]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(db_path) = lookup(ENV_DB_PATH) {
            debug!(%db_path, "Database path overridden");
            self.db_path = db_path;
        }
        if let Some(profile) = lookup(ENV_PROFILE) {
            debug!(%profile, "Profile overridden");
            self.profile = profile;
        }
        if let Some(log_file) = lookup(ENV_LOG_FILE) {
            debug!(%log_file, "Log file overridden");
            self.log_file = log_file;
        }
        self
    }

    /// Replaces the database path.
    pub fn set_db_path(&mut self, db_path: String) {
        self.db_path = db_path;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.db_path(), "noughts.db");
        assert_eq!(config.profile(), "TicTacToePrefs");
        assert_eq!(config.log_file(), "noughts.log");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("profile = \"alice\"\n").expect("valid toml");
        assert_eq!(config.profile(), "alice");
        assert_eq!(config.db_path(), "noughts.db");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = AppConfig::from_toml("db_path = [").expect_err("invalid toml");
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_take_priority() {
        let config = AppConfig::default().with_overrides(|key| match key {
            ENV_DB_PATH => Some("/tmp/other.db".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path(), "/tmp/other.db");
        assert_eq!(config.profile(), "TicTacToePrefs");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "db_path = \"stats.db\"\nlog_file = \"play.log\"").expect("write");
        let config = AppConfig::from_file(file.path()).expect("config loads");
        assert_eq!(config.db_path(), "stats.db");
        assert_eq!(config.log_file(), "play.log");
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(AppConfig::from_file("/definitely/not/here.toml").is_err());
    }
}
