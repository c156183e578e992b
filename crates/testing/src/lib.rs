//! Testing utilities for athlete performance scoring
//!
//! This crate provides:
//! - Test fixtures for the reference athletes and randomized records
//! - Builder patterns for custom records
//! - Mock implementations of the store and difficulty source
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use athlete_perf_testing::{builders::*, fixtures::*};
//!
//! let alice = alice();
//! assert_eq!(alice.final_score(), 80);
//!
//! let record = AthleteRecordBuilder::new()
//!     .with_name("Dana")
//!     .with_scores(60.0, 75.0, 90.0)
//!     .with_difficulties(1.1, 1.2, 1.3)
//!     .build();
//! assert!(record.qualified());
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;
pub mod strategies;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
pub use tempfile;
