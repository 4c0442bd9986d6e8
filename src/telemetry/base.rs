//! Fields shared by every telemetry variant.

use chrono::{DateTime, Utc};

use crate::context::TelemetryContext;

/// Creation instant and owned context. Only exists embedded in a variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseTelemetry {
    timestamp: DateTime<Utc>,
    context: TelemetryContext,
}

impl BaseTelemetry {
    pub(crate) fn new(timestamp: DateTime<Utc>, context: TelemetryContext) -> Self {
        Self { timestamp, context }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn context(&self) -> &TelemetryContext {
        &self.context
    }
}
