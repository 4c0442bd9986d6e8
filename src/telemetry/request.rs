use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tracing::debug;

use crate::context::TelemetryContext;
use crate::contracts::{
    base_type, format_duration, format_rfc3339_nano, Domain, RequestData, SCHEMA_VERSION,
};
use crate::factory::ItemFactory;
use crate::telemetry::{BaseTelemetry, Telemetry};

/// A handled request: when it started, how long it took and how it ended.
///
/// `start_time` is supplied by the caller and is unrelated to the item's own
/// timestamp, which records when the item was built.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTelemetry {
    base: BaseTelemetry,
    data: RequestData,
}

impl RequestTelemetry {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<DateTime<FixedOffset>>,
        duration: TimeDelta,
        response_code: impl Into<String>,
        success: bool,
    ) -> Self {
        Self::with_factory(
            ItemFactory::system(),
            name,
            start_time,
            duration,
            response_code,
            success,
        )
    }

    pub fn with_factory(
        factory: &ItemFactory,
        name: impl Into<String>,
        start_time: impl Into<DateTime<FixedOffset>>,
        duration: TimeDelta,
        response_code: impl Into<String>,
        success: bool,
    ) -> Self {
        let now = factory.now();
        let data = RequestData {
            ver: SCHEMA_VERSION,
            id: factory.new_id().hyphenated().to_string(),
            name: name.into(),
            start_time: format_rfc3339_nano(&start_time.into()),
            duration: format_duration(duration),
            response_code: response_code.into(),
            success,
        };
        let item = Self {
            base: BaseTelemetry::new(now, factory.new_context()),
            data,
        };
        debug!(
            base_type = base_type::REQUEST,
            id = %item.data.id(),
            duration = %item.data.duration(),
            success,
            "built request telemetry"
        );
        item
    }

    pub fn data(&self) -> &RequestData {
        &self.data
    }
}

impl Telemetry for RequestTelemetry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.base.timestamp()
    }

    fn context(&self) -> &TelemetryContext {
        self.base.context()
    }

    fn base_type_name(&self) -> &'static str {
        base_type::REQUEST
    }

    fn base_data(&self) -> Domain<'_> {
        Domain::Request(&self.data)
    }
}
