//! Athlete Performance Domain Types
//!
//! This crate provides the core domain model for recording athlete performance
//! across three fitness tests and deriving a difficulty-weighted composite score.
//!
//! ## Architecture
//!
//! The domain layer is organized into the following modules:
//!
//! - **dimension**: The three test dimensions and a fixed-order triple keyed by them
//! - **athlete**: Athlete names, scores, difficulties and the derived record
//! - **errors**: Validation errors and load warnings
//!
//! ## Usage
//!
//! ```rust
//! use athlete_perf_domain::{AthleteName, AthleteRecord, Difficulties, Scores};
//!
//! let record = AthleteRecord::new(
//!     AthleteName::parse("Alice").unwrap(),
//!     Scores::new(80.0, 90.0, 70.0).unwrap(),
//!     Difficulties::new(1.0, 1.0, 1.0).unwrap(),
//! );
//!
//! assert_eq!(record.final_score(), 80);
//! assert!(record.qualified());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod athlete;
pub mod dimension;
pub mod errors;

pub use athlete::{
    composite_score, round_half_even, AthleteName, AthleteRecord, Difficulties, ScoreOutcome,
    Scores, DIFFICULTY_MAX, DIFFICULTY_MIN, QUALIFICATION_THRESHOLD, SCORE_MAX, SCORE_MIN,
};
pub use dimension::{TestDimension, TestTriple};
pub use errors::{DomainResult, LoadWarning, ValidationError};
