//! Athlete Performance CLI Library
//!
//! Registration, reports and configuration for the `athlete-perf` binary,
//! with table, JSON and plain-text output.

pub mod commands;
pub mod config;
pub mod interactive;
pub mod output;

pub use config::Config;
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
