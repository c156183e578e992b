//! Scoring module - Registration engine and statistics
//!
//! The engine turns raw scores into records, keeps the registry and persists
//! it after every registration.

mod engine;
mod shared;
pub mod stats;

pub use engine::*;
pub use shared::*;
