//! CLI presentation: JSON view of a built item.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::context::TelemetryContext;
use crate::contracts::Domain;
use crate::error::TelemetryError;
use crate::telemetry::Telemetry;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemView<'a> {
    base_type: &'static str,
    time: String,
    context: &'a TelemetryContext,
    base_data: Domain<'a>,
}

/// Pretty JSON with the four capability-set values of an item.
pub fn format_item_json(item: &dyn Telemetry) -> Result<String, TelemetryError> {
    let view = ItemView {
        base_type: item.base_type_name(),
        time: item
            .timestamp()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        context: item.context(),
        base_data: item.base_data(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
