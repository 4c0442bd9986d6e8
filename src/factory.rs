//! Item factory: the clock, id source and context provider threaded into every
//! constructor.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use uuid::Uuid;

use crate::config::TelemetryConfig;
use crate::context::TelemetryContext;
use crate::contracts::SeverityLevel;
use crate::error::TelemetryError;
use crate::providers::{
    Clock, ContextProvider, IdGenerator, ItemContextProvider, RandomIdGenerator, SystemClock,
};
use crate::telemetry::{EventTelemetry, MetricTelemetry, RequestTelemetry, TraceTelemetry};

static SYSTEM: OnceLock<ItemFactory> = OnceLock::new();

/// Builds telemetry items from injected collaborators.
///
/// Cheap to clone; collaborators are shared behind `Arc`.
#[derive(Clone)]
pub struct ItemFactory {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    contexts: Arc<dyn ContextProvider>,
}

impl ItemFactory {
    /// Factory backed by the wall clock, random v4 ids and unseeded contexts.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            ids: Arc::new(RandomIdGenerator),
            contexts: Arc::new(ItemContextProvider::new()),
        }
    }

    /// Process-wide system factory used by the `Variant::new` constructors.
    pub fn system() -> &'static ItemFactory {
        SYSTEM.get_or_init(ItemFactory::new)
    }

    /// System collaborators with contexts seeded from configuration.
    pub fn from_config(config: &TelemetryConfig) -> Result<Self, TelemetryError> {
        let provider = ItemContextProvider::from_config(&config.context)?;
        Ok(Self::new().with_context_provider(provider))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn with_context_provider(mut self, contexts: impl ContextProvider + 'static) -> Self {
        self.contexts = Arc::new(contexts);
        self
    }

    pub fn trace(
        &self,
        message: impl Into<String>,
        severity_level: SeverityLevel,
    ) -> TraceTelemetry {
        TraceTelemetry::with_factory(self, message, severity_level)
    }

    pub fn event(&self, name: impl Into<String>) -> EventTelemetry {
        EventTelemetry::with_factory(self, name)
    }

    pub fn metric(&self, name: impl Into<String>, value: f32) -> MetricTelemetry {
        MetricTelemetry::with_factory(self, name, value)
    }

    pub fn request(
        &self,
        name: impl Into<String>,
        start_time: impl Into<DateTime<FixedOffset>>,
        duration: TimeDelta,
        response_code: impl Into<String>,
        success: bool,
    ) -> RequestTelemetry {
        RequestTelemetry::with_factory(self, name, start_time, duration, response_code, success)
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub(crate) fn new_id(&self) -> Uuid {
        self.ids.new_id()
    }

    pub(crate) fn new_context(&self) -> TelemetryContext {
        self.contexts.new_context()
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ItemFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemFactory").finish_non_exhaustive()
    }
}
