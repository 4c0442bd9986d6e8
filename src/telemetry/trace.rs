use chrono::{DateTime, Utc};
use tracing::debug;

use crate::context::TelemetryContext;
use crate::contracts::{base_type, Domain, MessageData, SeverityLevel};
use crate::factory::ItemFactory;
use crate::telemetry::{BaseTelemetry, Telemetry};

/// Free-text trace message, sent as a `Message` item.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceTelemetry {
    base: BaseTelemetry,
    data: MessageData,
}

impl TraceTelemetry {
    /// Build a trace with the process-wide clock and context provider.
    pub fn new(message: impl Into<String>, severity_level: SeverityLevel) -> Self {
        Self::with_factory(ItemFactory::system(), message, severity_level)
    }

    pub fn with_factory(
        factory: &ItemFactory,
        message: impl Into<String>,
        severity_level: SeverityLevel,
    ) -> Self {
        let now = factory.now();
        let data = MessageData::new(message.into(), severity_level);
        let item = Self {
            base: BaseTelemetry::new(now, factory.new_context()),
            data,
        };
        debug!(
            base_type = base_type::MESSAGE,
            severity = item.data.severity_level().as_str(),
            "built trace telemetry"
        );
        item
    }

    pub fn data(&self) -> &MessageData {
        &self.data
    }
}

impl Telemetry for TraceTelemetry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.base.timestamp()
    }

    fn context(&self) -> &TelemetryContext {
        self.base.context()
    }

    fn base_type_name(&self) -> &'static str {
        base_type::MESSAGE
    }

    fn base_data(&self) -> Domain<'_> {
        Domain::Message(&self.data)
    }
}
