//! CLI commands

pub mod register;
pub mod report;
pub mod show;

use crate::config::Config;
use crate::output::{colors, OutputFormat};
use anyhow::{Context, Result};
use athlete_perf_application::{ScoringEngine, UniformDifficultySource};
use athlete_perf_common::AppConfig;
use athlete_perf_infrastructure::CsvAthleteStore;
use std::path::{Path, PathBuf};

/// Engine as wired by the CLI
pub type Engine = ScoringEngine<CsvAthleteStore, UniformDifficultySource>;

/// Context passed to all commands
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub engine: Engine,
}

impl CommandContext {
    /// Open the data file chosen by `data_file`, the CLI config, or the
    /// application config, in that order
    pub fn new(config: Config, app_config: &AppConfig, data_file: Option<PathBuf>) -> Result<Self> {
        let path = data_file
            .or_else(|| config.data_file.clone())
            .unwrap_or_else(|| app_config.storage.data_file.clone());
        let format = config.output_format;
        Self::open(config, format, &path)
    }

    /// Load the registry from `path`, reporting skipped rows on stderr
    pub fn open(config: Config, format: OutputFormat, path: &Path) -> Result<Self> {
        let engine = ScoringEngine::load(CsvAthleteStore::new(path), UniformDifficultySource::new())
            .with_context(|| format!("Failed to load athletes from {}", path.display()))?;

        for warning in engine.load_warnings() {
            eprintln!("{} {}", colors::warning("Skipped:"), warning);
        }

        Ok(Self {
            config,
            format,
            engine,
        })
    }

    /// Path of the data file backing the engine
    pub fn data_file(&self) -> &Path {
        self.engine.store().path()
    }

    /// Print rendered command output
    pub fn emit(&self, rendered: &str) {
        println!("{}", rendered.trim_end());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// Context over an empty data file in a fresh directory
    pub fn context(format: OutputFormat) -> (TempDir, CommandContext) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("participants_data.csv");
        let ctx = CommandContext::open(Config::default(), format, &path).unwrap();
        (dir, ctx)
    }
}
