//! Tests for the composite score and the rules around it
//!
//! Covers rounding at the qualification boundary, range checks and the
//! consistency check applied to stored rows.

use athlete_perf_domain::{
    composite_score, round_half_even, AthleteName, AthleteRecord, Difficulties, Scores,
    TestDimension, ValidationError, QUALIFICATION_THRESHOLD,
};

fn scores(r: f64, s: f64, v: f64) -> Scores {
    Scores::new(r, s, v).unwrap()
}

fn difficulties(r: f64, s: f64, v: f64) -> Difficulties {
    Difficulties::new(r, s, v).unwrap()
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn test_ties_round_to_even() {
    assert_eq!(round_half_even(69.5), 70.0);
    assert_eq!(round_half_even(70.5), 70.0);
    assert_eq!(round_half_even(71.5), 72.0);
    assert_eq!(round_half_even(69.49), 69.0);
}

#[test]
fn test_qualification_boundary() {
    // (69 + 70 + 69.5) / 3 = 69.5, which ties to 70
    let at_boundary = composite_score(&scores(69.0, 70.0, 69.5), &Difficulties::neutral());
    assert_eq!(at_boundary.final_score, 70);
    assert!(at_boundary.qualified);

    let below = composite_score(&scores(69.0, 69.0, 69.0), &Difficulties::neutral());
    assert_eq!(below.final_score, 69);
    assert!(!below.qualified);
    assert!(below.final_score < QUALIFICATION_THRESHOLD);
}

#[test]
fn test_heavier_difficulty_pulls_score() {
    let outcome = composite_score(&scores(100.0, 0.0, 0.0), &difficulties(1.3, 1.0, 1.0));
    // 130 / 3.3 = 39.39...
    assert_eq!(outcome.final_score, 39);
}

// ============================================================================
// Range checks
// ============================================================================

#[test]
fn test_score_bounds_are_inclusive() {
    assert!(Scores::new(0.0, 100.0, 50.0).is_ok());
    assert!(matches!(
        Scores::new(-0.1, 50.0, 50.0),
        Err(ValidationError::ScoreOutOfRange { dimension: TestDimension::Resistance, .. })
    ));
    assert!(Scores::new(50.0, 50.0, f64::INFINITY).is_err());
}

#[test]
fn test_difficulty_bounds_are_inclusive() {
    assert!(Difficulties::new(1.0, 1.3, 1.15).is_ok());
    assert!(Difficulties::new(0.9, 1.0, 1.0).is_err());
    assert!(Difficulties::new(1.0, 1.31, 1.0).is_err());
}

// ============================================================================
// Stored rows
// ============================================================================

#[test]
fn test_stored_row_must_match_formula() {
    let name = AthleteName::parse("Bob").unwrap();
    let s = scores(50.0, 50.0, 50.0);
    let d = difficulties(1.2, 1.1, 1.3);

    assert!(AthleteRecord::from_stored(name.clone(), s, d, 50.0, false).is_ok());
    assert!(matches!(
        AthleteRecord::from_stored(name.clone(), s, d, 51.0, false),
        Err(ValidationError::InconsistentFinalScore { computed: 50, .. })
    ));
    assert!(matches!(
        AthleteRecord::from_stored(name, s, d, 50.0, true),
        Err(ValidationError::InconsistentQualification { .. })
    ));
}
