//! Error types for the athlete performance domain.
//!
//! `ValidationError` covers every way a name, score triple, difficulty triple
//! or stored record can be rejected. `LoadWarning` describes a stored row that
//! was skipped while loading; it is reported, never propagated.

use crate::dimension::TestDimension;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Validation errors raised when constructing domain values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Athlete name is empty or whitespace only
    #[error("Athlete name cannot be empty")]
    EmptyName,

    /// A score or difficulty is NaN or infinite
    #[error("{dimension} {field} must be a finite number")]
    NonFiniteValue {
        /// Test the value belongs to
        dimension: TestDimension,
        /// Either "score" or "difficulty"
        field: &'static str,
    },

    /// Score outside the accepted range
    #[error("{dimension} score {value} not in [{min}, {max}]")]
    ScoreOutOfRange {
        /// Test the value belongs to
        dimension: TestDimension,
        /// Rejected value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Difficulty multiplier outside the accepted range
    #[error("{dimension} difficulty {value} not in [{min}, {max}]")]
    DifficultyOutOfRange {
        /// Test the value belongs to
        dimension: TestDimension,
        /// Rejected value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Stored final score disagrees with the one derived from scores and difficulties
    #[error("Stored final score {stored} does not match computed score {computed}")]
    InconsistentFinalScore {
        /// Value read from storage
        stored: f64,
        /// Value derived from the formula
        computed: u8,
    },

    /// Stored qualification flag disagrees with the final score
    #[error("Stored qualification {stored} does not match final score {final_score}")]
    InconsistentQualification {
        /// Flag read from storage
        stored: bool,
        /// Final score the flag should follow
        final_score: u8,
    },

    /// Qualification column holds something other than "Yes" or "No"
    #[error("Qualified must be \"Yes\" or \"No\", got {0:?}")]
    InvalidQualifiedFlag(String),
}

impl ValidationError {
    /// Name of the offending field, used in structured logs
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::NonFiniteValue { field, .. } => *field,
            Self::ScoreOutOfRange { .. } => "score",
            Self::DifficultyOutOfRange { .. } => "difficulty",
            Self::InconsistentFinalScore { .. } => "final_score",
            Self::InconsistentQualification { .. } | Self::InvalidQualifiedFlag(_) => "qualified",
        }
    }
}

/// A stored row that could not be turned into a record and was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadWarning {
    /// 1-based data row number (header excluded)
    pub row: usize,

    /// Athlete name, when it could be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Why the row was skipped
    pub reason: String,
}

impl LoadWarning {
    /// Create a warning for a given row
    pub fn new(row: usize, name: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            row,
            name,
            reason: reason.into(),
        }
    }
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "row {} ({}): {}", self.row, name, self.reason),
            None => write!(f, "row {}: {}", self.row, self.reason),
        }
    }
}

/// Domain-level result type
pub type DomainResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::ScoreOutOfRange {
            dimension: TestDimension::Strength,
            value: 101.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "Strength score 101 not in [0, 100]");
        assert_eq!(err.field(), "score");

        assert_eq!(ValidationError::EmptyName.field(), "name");
    }

    #[test]
    fn test_stored_row_errors_name_both_values() {
        let err = ValidationError::InconsistentFinalScore {
            stored: 75.0,
            computed: 80,
        };
        assert_eq!(err.to_string(), "Stored final score 75 does not match computed score 80");
        assert_eq!(err.field(), "final_score");

        let err = ValidationError::InconsistentQualification {
            stored: true,
            final_score: 50,
        };
        assert_eq!(err.to_string(), "Stored qualification true does not match final score 50");
        assert_eq!(err.field(), "qualified");

        let err = ValidationError::NonFiniteValue {
            dimension: TestDimension::Velocity,
            field: "difficulty",
        };
        assert_eq!(err.to_string(), "Velocity difficulty must be a finite number");
        assert_eq!(err.field(), "difficulty");
    }

    #[test]
    fn test_load_warning_display() {
        let warning = LoadWarning::new(3, Some("Bob".to_string()), "bad velocity");
        assert_eq!(warning.to_string(), "row 3 (Bob): bad velocity");

        let warning = LoadWarning::new(7, None, "missing field");
        assert_eq!(warning.to_string(), "row 7: missing field");
    }
}
