use chrono::{DateTime, Utc};

use crate::context::TelemetryContext;
use crate::contracts::Domain;
use crate::telemetry::{
    EventTelemetry, MetricTelemetry, RequestTelemetry, Telemetry, TraceTelemetry,
};

/// Owned item of any variant, for queues and batches that mix kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryItem {
    Trace(TraceTelemetry),
    Event(EventTelemetry),
    Metric(MetricTelemetry),
    Request(RequestTelemetry),
}

impl TelemetryItem {
    fn inner(&self) -> &dyn Telemetry {
        match self {
            TelemetryItem::Trace(item) => item,
            TelemetryItem::Event(item) => item,
            TelemetryItem::Metric(item) => item,
            TelemetryItem::Request(item) => item,
        }
    }
}

impl Telemetry for TelemetryItem {
    fn timestamp(&self) -> DateTime<Utc> {
        self.inner().timestamp()
    }

    fn context(&self) -> &TelemetryContext {
        self.inner().context()
    }

    fn base_type_name(&self) -> &'static str {
        self.inner().base_type_name()
    }

    fn base_data(&self) -> Domain<'_> {
        self.inner().base_data()
    }
}

impl From<TraceTelemetry> for TelemetryItem {
    fn from(item: TraceTelemetry) -> Self {
        TelemetryItem::Trace(item)
    }
}

impl From<EventTelemetry> for TelemetryItem {
    fn from(item: EventTelemetry) -> Self {
        TelemetryItem::Event(item)
    }
}

impl From<MetricTelemetry> for TelemetryItem {
    fn from(item: MetricTelemetry) -> Self {
        TelemetryItem::Metric(item)
    }
}

impl From<RequestTelemetry> for TelemetryItem {
    fn from(item: RequestTelemetry) -> Self {
        TelemetryItem::Request(item)
    }
}
