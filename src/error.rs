//! Error types for the telemetry contracts crate.
//!
//! Item constructors are total and never return these. They cover the ambient
//! layers around the items: configuration, context seeding and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid context key '{key}': {reason}")]
    InvalidContext { key: String, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for TelemetryError {
    fn from(err: config::ConfigError) -> Self {
        TelemetryError::ConfigError(err.to_string())
    }
}
