//! Registration request validation

use super::{Validatable, ValidationResult, ValidatorExt};
use athlete_perf_domain::{AthleteName, Scores, TestDimension, TestTriple, ValidationError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw input for registering an athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1, message = "Athlete name cannot be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub resistance: f64,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub strength: f64,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub velocity: f64,
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>, resistance: f64, strength: f64, velocity: f64) -> Self {
        Self {
            name: name.into(),
            resistance,
            strength,
            velocity,
        }
    }

    fn score_triple(&self) -> TestTriple<f64> {
        TestTriple::new(self.resistance, self.strength, self.velocity)
    }

    /// Turn a valid request into domain values
    pub fn into_parts(self) -> Result<(AthleteName, Scores), ValidationError> {
        let scores = Scores::from_triple(self.score_triple())?;
        let name = AthleteName::parse(self.name)?;
        Ok((name, scores))
    }
}

impl Validatable for RegistrationRequest {
    fn validate_all(&self) -> ValidationResult {
        let mut result = self.to_validation_result();

        if !self.name.is_empty() && self.name.trim().is_empty() {
            result.add_field_error("name", "Athlete name cannot be blank");
        }

        // Range checks let NaN through
        for (dimension, value) in self.score_triple().iter() {
            if !value.is_finite() {
                result.add_field_error(field_name(dimension), "Score must be a finite number");
            }
        }

        result
    }
}

fn field_name(dimension: TestDimension) -> &'static str {
    match dimension {
        TestDimension::Resistance => "resistance",
        TestDimension::Strength => "strength",
        TestDimension::Velocity => "velocity",
    }
}
