//! Item inspector binary
//!
//! Builds one telemetry item from the command line and prints the values an
//! envelope serializer would read from it.

use anyhow::Context;
use appinsights::cli::{build_item, format_item_json, Cli};
use appinsights::config::{ConfigLoader, TelemetryConfig};
use appinsights::logging::{init_logging, LoggingConfig};
use appinsights::ItemFactory;
use clap::Parser;
use tracing::{debug, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let logging_config = build_logging_config(&cli, &config);
    init_logging(Some(&logging_config)).context("failed to initialize logging")?;

    debug!(?cli, "item inspector starting");

    let factory = ItemFactory::from_config(&config).context("invalid context configuration")?;
    let item = build_item(&factory, &cli.command);
    info!(base_type = appinsights::Telemetry::base_type_name(&item), "item built");

    println!("{}", format_item_json(&item)?);
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<TelemetryConfig> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ConfigLoader::load().context("failed to load config")?,
    };
    Ok(config)
}

/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &TelemetryConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    logging
}
