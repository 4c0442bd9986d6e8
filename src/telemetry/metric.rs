use chrono::{DateTime, Utc};
use tracing::debug;

use crate::context::TelemetryContext;
use crate::contracts::{base_type, Domain, MetricData};
use crate::factory::ItemFactory;
use crate::telemetry::{BaseTelemetry, Telemetry};

/// Single measured value. Values are carried as given, without range checks.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTelemetry {
    base: BaseTelemetry,
    data: MetricData,
}

impl MetricTelemetry {
    pub fn new(name: impl Into<String>, value: f32) -> Self {
        Self::with_factory(ItemFactory::system(), name, value)
    }

    pub fn with_factory(factory: &ItemFactory, name: impl Into<String>, value: f32) -> Self {
        let now = factory.now();
        let data = MetricData::single(name.into(), value);
        let item = Self {
            base: BaseTelemetry::new(now, factory.new_context()),
            data,
        };
        debug!(base_type = base_type::METRIC, value, "built metric telemetry");
        item
    }

    pub fn data(&self) -> &MetricData {
        &self.data
    }
}

impl Telemetry for MetricTelemetry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.base.timestamp()
    }

    fn context(&self) -> &TelemetryContext {
        self.base.context()
    }

    fn base_type_name(&self) -> &'static str {
        base_type::METRIC
    }

    fn base_data(&self) -> Domain<'_> {
        Domain::Metric(&self.data)
    }
}
