//! Athlete records and the composite scoring formula.

use crate::dimension::{TestDimension, TestTriple};
use crate::errors::{DomainResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display};

/// Lowest accepted raw score
pub const SCORE_MIN: f64 = 0.0;
/// Highest accepted raw score
pub const SCORE_MAX: f64 = 100.0;
/// Lowest difficulty multiplier
pub const DIFFICULTY_MIN: f64 = 1.0;
/// Highest difficulty multiplier
pub const DIFFICULTY_MAX: f64 = 1.3;
/// Final score an athlete needs to qualify
pub const QUALIFICATION_THRESHOLD: u8 = 70;

/// Round to the nearest integer, ties to even
#[inline]
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Unique, case-sensitive athlete identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AthleteName(String);

impl AthleteName {
    /// Parse a name, rejecting empty or whitespace-only input.
    ///
    /// The name is stored verbatim: no trimming or case folding happens here.
    pub fn parse(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AthleteName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AthleteName> for String {
    fn from(name: AthleteName) -> Self {
        name.0
    }
}

impl AsRef<str> for AthleteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AthleteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for AthleteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_range(
    triple: &TestTriple<f64>,
    field: &'static str,
    min: f64,
    max: f64,
) -> DomainResult<()> {
    for (dimension, &value) in triple.iter() {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { dimension, field });
        }
        if value < min || value > max {
            return Err(match field {
                "difficulty" => ValidationError::DifficultyOutOfRange {
                    dimension,
                    value,
                    min,
                    max,
                },
                _ => ValidationError::ScoreOutOfRange {
                    dimension,
                    value,
                    min,
                    max,
                },
            });
        }
    }
    Ok(())
}

/// Raw test scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scores(TestTriple<f64>);

impl Scores {
    /// Validate and build a score triple
    pub fn new(resistance: f64, strength: f64, velocity: f64) -> DomainResult<Self> {
        Self::from_triple(TestTriple::new(resistance, strength, velocity))
    }

    /// Validate an existing triple
    pub fn from_triple(triple: TestTriple<f64>) -> DomainResult<Self> {
        check_range(&triple, "score", SCORE_MIN, SCORE_MAX)?;
        Ok(Self(triple))
    }

    /// Score for one test
    pub fn get(&self, dimension: TestDimension) -> f64 {
        self.0[dimension]
    }

    /// Underlying triple
    pub fn as_triple(&self) -> &TestTriple<f64> {
        &self.0
    }
}

/// Difficulty multipliers, each in [1.0, 1.3]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Difficulties(TestTriple<f64>);

impl Difficulties {
    /// Validate and build a difficulty triple
    pub fn new(resistance: f64, strength: f64, velocity: f64) -> DomainResult<Self> {
        Self::from_triple(TestTriple::new(resistance, strength, velocity))
    }

    /// Validate an existing triple
    pub fn from_triple(triple: TestTriple<f64>) -> DomainResult<Self> {
        check_range(&triple, "difficulty", DIFFICULTY_MIN, DIFFICULTY_MAX)?;
        Ok(Self(triple))
    }

    /// Neutral multipliers (all 1.0)
    pub fn neutral() -> Self {
        Self(TestTriple::new(1.0, 1.0, 1.0))
    }

    /// Multiplier for one test
    pub fn get(&self, dimension: TestDimension) -> f64 {
        self.0[dimension]
    }

    /// Underlying triple
    pub fn as_triple(&self) -> &TestTriple<f64> {
        &self.0
    }
}

/// Composite score together with its qualification verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    /// Difficulty-weighted average, rounded half-to-even
    pub final_score: u8,
    /// `final_score >= QUALIFICATION_THRESHOLD`
    pub qualified: bool,
}

/// Compute `round(Σ(score·difficulty) / Σ(difficulty))` and the qualification flag.
///
/// Validated inputs keep the weighted average inside [0, 100], so the clamp
/// only absorbs floating-point noise at the bounds.
pub fn composite_score(scores: &Scores, difficulties: &Difficulties) -> ScoreOutcome {
    let weighted_sum = scores
        .as_triple()
        .zip_with(*difficulties.as_triple(), |s, d| s * d)
        .sum();
    let difficulty_sum = difficulties.as_triple().sum();

    let final_score = round_half_even(weighted_sum / difficulty_sum).clamp(SCORE_MIN, SCORE_MAX) as u8;

    ScoreOutcome {
        final_score,
        qualified: final_score >= QUALIFICATION_THRESHOLD,
    }
}

/// A fully scored athlete.
///
/// `final_score` and `qualified` are derived on construction and cannot be set
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteRecord {
    name: AthleteName,
    scores: Scores,
    difficulties: Difficulties,
    final_score: u8,
    qualified: bool,
}

impl AthleteRecord {
    /// Score an athlete
    pub fn new(name: AthleteName, scores: Scores, difficulties: Difficulties) -> Self {
        let outcome = composite_score(&scores, &difficulties);
        Self {
            name,
            scores,
            difficulties,
            final_score: outcome.final_score,
            qualified: outcome.qualified,
        }
    }

    /// Rebuild a record read back from storage, checking that the stored
    /// derived columns agree with the formula.
    pub fn from_stored(
        name: AthleteName,
        scores: Scores,
        difficulties: Difficulties,
        stored_final_score: f64,
        stored_qualified: bool,
    ) -> DomainResult<Self> {
        let record = Self::new(name, scores, difficulties);

        if stored_final_score != f64::from(record.final_score) {
            return Err(ValidationError::InconsistentFinalScore {
                stored: stored_final_score,
                computed: record.final_score,
            });
        }
        if stored_qualified != record.qualified {
            return Err(ValidationError::InconsistentQualification {
                stored: stored_qualified,
                final_score: record.final_score,
            });
        }

        Ok(record)
    }

    /// Registry key
    pub fn name(&self) -> &AthleteName {
        &self.name
    }

    /// Raw test scores
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Multipliers drawn at registration
    pub fn difficulties(&self) -> &Difficulties {
        &self.difficulties
    }

    /// Rounded composite score
    pub fn final_score(&self) -> u8 {
        self.final_score
    }

    /// Whether the final score reaches the threshold
    pub fn qualified(&self) -> bool {
        self.qualified
    }

    /// "Yes" or "No", as shown in reports and stored on disk
    pub fn qualified_display(&self) -> &'static str {
        if self.qualified {
            "Yes"
        } else {
            "No"
        }
    }

    /// Per-test weighted contribution `score · difficulty`, derived on every call
    pub fn weighted_contributions(&self) -> TestTriple<f64> {
        self.scores
            .as_triple()
            .zip_with(*self.difficulties.as_triple(), |s, d| s * d)
    }
}
