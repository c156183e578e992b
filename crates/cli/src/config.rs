//! CLI configuration management
//!
//! Handles loading and saving user preferences from ~/.athlete-perf/config.toml

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Data file override; the application config decides when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,

    /// Where this configuration is saved; not persisted
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_colored() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            output_format: OutputFormat::default(),
            colored: default_colored(),
            debug: false,
            path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".athlete-perf"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or defaults if it doesn't exist, then
    /// apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_file()?)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str::<Config>(&contents).context("Failed to parse config file")?
        } else {
            Self::default()
        };

        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(data_file) = std::env::var("ATHLETE_PERF_DATA_FILE") {
            self.data_file = Some(PathBuf::from(data_file));
        }
        if let Ok(format) = std::env::var("ATHLETE_PERF_OUTPUT_FORMAT") {
            if let Some(format) = OutputFormat::parse(&format) {
                self.output_format = format;
            }
        }
        if std::env::var("ATHLETE_PERF_DEBUG").is_ok() {
            self.debug = true;
        }
        if std::env::var("NO_COLOR").is_ok() {
            self.colored = false;
        }
    }

    /// Save configuration to the file it was loaded from
    pub fn save(&self) -> Result<()> {
        let config_file = match &self.path {
            Some(path) => path.clone(),
            None => Self::config_file()?,
        };

        if let Some(dir) = config_file.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).context("Failed to create config directory")?;
            }
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_file" | "data-file" => self.data_file.as_ref().map(|p| p.display().to_string()),
            "output_format" | "output-format" | "format" => Some(self.output_format.to_string()),
            "colored" | "color" => Some(self.colored.to_string()),
            "debug" => Some(self.debug.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// Only `key` changes on disk; flag and environment overrides held by
    /// `self` are not written back.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut stored = self.stored()?;
        stored.apply(key, value)?;
        self.apply(key, value)?;
        stored.save()
    }

    /// The configuration as saved, without overrides
    fn stored(&self) -> Result<Self> {
        match &self.path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_file()?),
        }
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data_file" | "data-file" => {
                if value.trim().is_empty() {
                    anyhow::bail!("Data file path cannot be empty");
                }
                self.data_file = Some(PathBuf::from(value));
            }
            "output_format" | "output-format" | "format" => {
                self.output_format = OutputFormat::parse(value).with_context(|| {
                    format!("Invalid output format: {}. Use json, table, or plain", value)
                })?;
            }
            "colored" | "color" => {
                self.colored = value.parse().context("Invalid boolean value")?;
            }
            "debug" => {
                self.debug = value.parse().context("Invalid boolean value")?;
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> Result<()> {
        let path = self.path.take();
        *self = Self {
            path,
            ..Self::default()
        };
        self.save()
    }

    /// Key/value pairs for display
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "data_file",
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(from application config)".to_string()),
            ),
            ("output_format", self.output_format.to_string()),
            ("colored", self.colored.to_string()),
            ("debug", self.debug.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.colored);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.data_file = Some(PathBuf::from("club.csv"));
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_get() {
        let config = Config::default();
        assert_eq!(config.get("format"), Some("table".to_string()));
        assert_eq!(config.get("colored"), Some("true".to_string()));
        assert_eq!(config.get("data_file"), None);
        assert_eq!(config.get("unknown"), None);
    }

    #[test]
    fn test_set_persists_and_reset_restores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        config.set("format", "json").unwrap();
        config.set("data-file", "club.csv").unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.output_format, OutputFormat::Json);
        assert_eq!(reloaded.data_file, Some(PathBuf::from("club.csv")));

        let mut reloaded = reloaded;
        reloaded.reset().unwrap();
        assert_eq!(Config::load_from(&path).unwrap().output_format, OutputFormat::Table);
    }

    #[test]
    fn test_set_does_not_persist_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        // As applied for `-o json` and NO_COLOR
        config.output_format = OutputFormat::Json;
        config.colored = false;

        config.set("debug", "true").unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert!(reloaded.debug);
        assert_eq!(reloaded.output_format, OutputFormat::Table);
        assert!(reloaded.colored);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.debug);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.set("format", "yaml").is_err());
        assert!(config.set("colored", "maybe").is_err());
        assert!(config.set("nope", "1").is_err());
        assert!(config.set("data_file", " ").is_err());
    }
}
