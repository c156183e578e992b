//! Application layer for athlete performance scoring
//!
//! This crate orchestrates domain logic and coordinates between layers.
//!
//! ## Architecture
//!
//! The application layer sits between the domain and infrastructure layers.
//! It owns the in-memory registry of athletes and talks to storage only
//! through the [`AthleteStorePort`] trait.
//!
//! ## Modules
//!
//! - `registry` - Insertion-ordered athlete registry
//! - `difficulty` - Difficulty multiplier sources
//! - `scoring` - Registration engine and descriptive statistics
//! - `report` - General and individual reports with chart projections
//! - `ports` - Persistence port implemented by the infrastructure layer
//! - `validation` - Input validation for registration requests

pub mod difficulty;
pub mod ports;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod validation;

// Re-export commonly used types
pub use difficulty::{DifficultySource, FixedDifficultySource, UniformDifficultySource};
pub use ports::{AthleteStorePort, LoadOutcome};
pub use registry::Registry;
pub use report::{
    Aggregator, BarChart, CorrelationMatrix, Description, GeneralReport, GeneralReportCharts,
    Heatmap, IndividualReport, PieChart, PieSlice, ReportRow, Statistics, TestBreakdown,
};
pub use scoring::{ScoringEngine, SharedScoringEngine};
pub use validation::{RegistrationRequest, ValidationResult, ValidatorExt};

use athlete_perf_domain::ValidationError;
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::Persistence(_) => "PERSISTENCE_ERROR",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for command-line front ends
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::InvalidInput(_) => 2,
            ApplicationError::Persistence(_) => 3,
            ApplicationError::Internal(_) => 1,
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::InvalidInput(err.to_string())
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
