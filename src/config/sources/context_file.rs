//! Case-preserving `[context]` reader.
//!
//! The `config` crate folds map keys to lowercase, which would turn
//! `ai.cloud.roleInstance` into `ai.cloud.roleinstance`. Tag and property
//! keys are therefore read straight from the TOML file.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::context::ContextConfig;
use crate::error::TelemetryError;

#[derive(Debug, Default, Deserialize)]
struct ContextSection {
    #[serde(default)]
    context: ContextConfig,
}

/// Read the `[context]` table of a TOML config file, keys untouched.
pub fn read_context(path: &Path) -> Result<ContextConfig, TelemetryError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        TelemetryError::ConfigError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    let section: ContextSection = toml::from_str(&contents).map_err(|e| {
        TelemetryError::ConfigError(format!(
            "Failed to parse context in {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!(
        config_path = %path.display(),
        tags = section.context.tags.len(),
        properties = section.context.properties.len(),
        "read telemetry context"
    );
    Ok(section.context)
}
