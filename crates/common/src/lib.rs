//! Common utilities shared by every athlete performance crate.
//!
//! This crate provides:
//! - Layered configuration loading (files and environment)
//! - Tracing subscriber setup for structured logging

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, StorageConfig, TelemetryConfig};
pub use telemetry::init_tracing;

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
