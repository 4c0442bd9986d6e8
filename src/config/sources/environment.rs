//! Environment source: `APPINSIGHTS__SECTION__KEY=value`.
//!
//! The double underscore keeps these apart from the `APPINSIGHTS_LOG*`
//! variables read directly by the logging module.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "APPINSIGHTS";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__"),
    )
}
