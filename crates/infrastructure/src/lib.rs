//! Infrastructure layer for athlete performance scoring
//!
//! This crate provides the CSV-backed implementation of the application's
//! [`AthleteStorePort`](athlete_perf_application::AthleteStorePort).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use athlete_perf_application::{ScoringEngine, UniformDifficultySource};
//! use athlete_perf_infrastructure::CsvAthleteStore;
//!
//! let store = CsvAthleteStore::new("participants_data.csv");
//! let mut engine = ScoringEngine::load(store, UniformDifficultySource::new())?;
//! engine.register("Alice", 80.0, 90.0, 70.0)?;
//! # Ok::<(), athlete_perf_application::ApplicationError>(())
//! ```

pub mod row;
pub mod storage;

pub use row::{CsvRow, HEADER};
pub use storage::CsvAthleteStore;

use athlete_perf_application::ApplicationError;
use std::path::PathBuf;

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Opening, writing or syncing a file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Moving the temporary file over the data file failed
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<Error> for ApplicationError {
    fn from(err: Error) -> Self {
        ApplicationError::Persistence(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_to_persistence() {
        let err = Error::io(
            "/nowhere/athletes.csv",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let app: ApplicationError = err.into();
        match app {
            ApplicationError::Persistence(msg) => {
                assert!(msg.contains("/nowhere/athletes.csv"));
                assert!(msg.contains("denied"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
