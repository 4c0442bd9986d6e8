//! Configuration System
//!
//! Layered configuration for the telemetry stack: defaults, a user-level
//! config file, an optional explicit file, then `APPINSIGHTS__*` environment
//! overrides. Tests included.

use crate::context::ContextConfig;
use crate::error::TelemetryError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Tags and properties stamped onto every item's context
    #[serde(default)]
    pub context: ContextConfig,
}

impl TelemetryConfig {
    /// Validate the entire configuration, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<TelemetryError>> {
        let errors: Vec<TelemetryError> = [self.logging.validate(), self.context.validate()]
            .into_iter()
            .filter_map(Result::err)
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
