//! Configuration management for the application.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (if present)
//! 3. `config/{APP_ENV}.toml` (if present)
//! 4. Environment variables prefixed with `ATHLETE_PERF_`, using `__` between
//!    nested keys (e.g. `ATHLETE_PERF_STORAGE__DATA_FILE=/srv/athletes.csv`)
//!
//! ## Example Configuration
//!
//! ```toml
//! [storage]
//! data_file = "participants_data.csv"
//!
//! [telemetry]
//! log_level = "info"
//! json_logging = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "ATHLETE_PERF";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Where athlete records are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// CSV file holding one row per athlete
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("participants_data.csv")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `./config` and the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use athlete_perf_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Athletes are stored in {}", config.storage.data_file.display());
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config"))
    }

    /// Load configuration using `dir` as the configuration directory
    pub fn load_from(dir: &Path) -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.data_file.as_os_str().is_empty() {
            anyhow::bail!("Storage data file path is required");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log level '{}', expected one of {:?}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.data_file, PathBuf::from("participants_data.csv"));
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(!config.telemetry.json_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.storage.data_file = PathBuf::new();
        assert!(config.validate().is_err());
        config.storage.data_file = PathBuf::from("athletes.csv");

        config.telemetry.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        config.telemetry.log_level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[storage]\ndata_file = \"club.csv\"\n\n[telemetry]\nlog_level = \"info\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.storage.data_file, PathBuf::from("club.csv"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.telemetry.log_level, default_log_level());
    }
}
