//! CLI route: turn a parsed command into a telemetry item.

use chrono::{TimeDelta, Utc};

use crate::cli::parse::Commands;
use crate::factory::ItemFactory;
use crate::telemetry::TelemetryItem;

pub fn build_item(factory: &ItemFactory, command: &Commands) -> TelemetryItem {
    match command {
        Commands::Trace { message, severity } => factory.trace(message.as_str(), *severity).into(),
        Commands::Event { name } => factory.event(name.as_str()).into(),
        Commands::Metric { name, value } => factory.metric(name.as_str(), *value).into(),
        Commands::Request {
            name,
            start,
            duration_ms,
            response_code,
            failed,
        } => {
            let start = start.unwrap_or_else(|| Utc::now().fixed_offset());
            factory
                .request(
                    name.as_str(),
                    start,
                    TimeDelta::milliseconds(*duration_ms),
                    response_code.as_str(),
                    !failed,
                )
                .into()
        }
    }
}
