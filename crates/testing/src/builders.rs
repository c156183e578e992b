//! Fluent builder pattern for constructing test data.

use athlete_perf_domain::{AthleteName, AthleteRecord, Difficulties, Scores, TestTriple};
use athlete_perf_application::RegistrationRequest;

/// Builder for creating AthleteRecord test instances.
///
/// Panics on invalid values; only meant for tests.
#[derive(Clone)]
pub struct AthleteRecordBuilder {
    name: String,
    scores: TestTriple<f64>,
    difficulties: TestTriple<f64>,
}

impl AthleteRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "Test Athlete".to_string(),
            scores: TestTriple::new(50.0, 50.0, 50.0),
            difficulties: TestTriple::new(1.0, 1.0, 1.0),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_scores(mut self, resistance: f64, strength: f64, velocity: f64) -> Self {
        self.scores = TestTriple::new(resistance, strength, velocity);
        self
    }

    /// Same score on every test
    pub fn with_uniform_score(self, score: f64) -> Self {
        self.with_scores(score, score, score)
    }

    pub fn with_difficulties(mut self, resistance: f64, strength: f64, velocity: f64) -> Self {
        self.difficulties = TestTriple::new(resistance, strength, velocity);
        self
    }

    pub fn build(self) -> AthleteRecord {
        AthleteRecord::new(
            AthleteName::parse(self.name).expect("builder name must not be blank"),
            Scores::from_triple(self.scores).expect("builder scores must be in range"),
            Difficulties::from_triple(self.difficulties).expect("builder difficulties must be in range"),
        )
    }

    /// The registration request that would produce this record's scores
    pub fn build_request(self) -> RegistrationRequest {
        RegistrationRequest::new(
            self.name,
            self.scores.resistance,
            self.scores.strength,
            self.scores.velocity,
        )
    }
}

impl Default for AthleteRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
