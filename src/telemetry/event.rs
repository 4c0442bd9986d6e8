use chrono::{DateTime, Utc};
use tracing::debug;

use crate::context::TelemetryContext;
use crate::contracts::{base_type, Domain, EventData};
use crate::factory::ItemFactory;
use crate::telemetry::{BaseTelemetry, Telemetry};

/// Named custom event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTelemetry {
    base: BaseTelemetry,
    data: EventData,
}

impl EventTelemetry {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_factory(ItemFactory::system(), name)
    }

    pub fn with_factory(factory: &ItemFactory, name: impl Into<String>) -> Self {
        let now = factory.now();
        let data = EventData::new(name.into());
        let item = Self {
            base: BaseTelemetry::new(now, factory.new_context()),
            data,
        };
        debug!(
            base_type = base_type::EVENT,
            name = %item.data.name(),
            "built event telemetry"
        );
        item
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }
}

impl Telemetry for EventTelemetry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.base.timestamp()
    }

    fn context(&self) -> &TelemetryContext {
        self.base.context()
    }

    fn base_type_name(&self) -> &'static str {
        base_type::EVENT
    }

    fn base_data(&self) -> Domain<'_> {
        Domain::Event(&self.data)
    }
}
