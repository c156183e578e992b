//! Proptest strategies for athlete data.

use athlete_perf_domain::{AthleteRecord, TestTriple};
use proptest::prelude::*;

use crate::builders::AthleteRecordBuilder;

/// Any accepted raw score
pub fn score() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

/// Any difficulty a uniform source can produce
pub fn difficulty() -> impl Strategy<Value = f64> {
    (10u8..=13).prop_map(|d| f64::from(d) / 10.0)
}

pub fn score_triple() -> impl Strategy<Value = TestTriple<f64>> {
    (score(), score(), score()).prop_map(|(r, s, v)| TestTriple::new(r, s, v))
}

pub fn difficulty_triple() -> impl Strategy<Value = TestTriple<f64>> {
    (difficulty(), difficulty(), difficulty()).prop_map(|(r, s, v)| TestTriple::new(r, s, v))
}

/// Non-blank athlete names
pub fn athlete_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z .'-]{0,30}"
}

pub fn athlete_record() -> impl Strategy<Value = AthleteRecord> {
    (athlete_name(), score_triple(), difficulty_triple()).prop_map(|(name, s, d)| {
        AthleteRecordBuilder::new()
            .with_name(name)
            .with_scores(s.resistance, s.strength, s.velocity)
            .with_difficulties(d.resistance, d.strength, d.velocity)
            .build()
    })
}
