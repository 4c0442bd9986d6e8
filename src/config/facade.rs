//! Config loading entry points.

use std::path::Path;

use tracing::debug;

use crate::config::merge::merge_policy::builder_with_defaults;
use crate::config::sources::{context_file, environment, global_file};
use crate::config::TelemetryConfig;
use crate::error::TelemetryError;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the user-level config file (if present) and environment overrides.
    pub fn load() -> Result<TelemetryConfig, TelemetryError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        let context_source = global_file::global_config_path().filter(|path| path.exists());
        finish(builder, context_source.as_deref())
    }

    /// Load defaults, the given file (required) and environment overrides.
    /// The user-level config file is skipped.
    pub fn load_from_file(path: &Path) -> Result<TelemetryConfig, TelemetryError> {
        let builder = builder_with_defaults()?
            .add_source(config::File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        debug!(config_path = %path.display(), "loading telemetry config");
        finish(builder, Some(path))
    }
}

/// Build, swap in the case-preserved context from `context_source`, then validate.
fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    context_source: Option<&Path>,
) -> Result<TelemetryConfig, TelemetryError> {
    let mut config: TelemetryConfig = builder.build()?.try_deserialize()?;

    // Context keys are case-sensitive wire names; the file is authoritative.
    config.context = match context_source {
        Some(path) => context_file::read_context(path)?,
        None => Default::default(),
    };

    config.validate().map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        TelemetryError::ConfigError(format!(
            "Configuration validation failed:\n{}",
            error_msgs.join("\n")
        ))
    })?;

    Ok(config)
}
