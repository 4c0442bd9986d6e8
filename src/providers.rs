//! Collaborators consulted while building an item: clock, identifier source
//! and context factory. System implementations live alongside the traits;
//! tests substitute deterministic ones.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::context::{tag_keys, ContextConfig, TelemetryContext};
use crate::error::TelemetryError;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of request identifiers.
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> Uuid;
}

/// Factory for per-item contexts. Each call must return an independent value.
pub trait ContextProvider: Send + Sync {
    fn new_context(&self) -> TelemetryContext;
}

/// Wall clock backed by `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random version 4 identifiers from the OS entropy source.
///
/// Panics, rather than handing out a nil id, if the platform RNG is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// SDK version tag value reported on every item.
pub fn sdk_version() -> String {
    format!("rust:{}", env!("CARGO_PKG_VERSION"))
}

/// Builds contexts pre-populated with the SDK version and configured tags.
#[derive(Clone, Default)]
pub struct ItemContextProvider {
    seed: ContextConfig,
}

impl ItemContextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ContextConfig) -> Result<Self, TelemetryError> {
        config.validate()?;
        Ok(Self {
            seed: config.clone(),
        })
    }
}

impl ContextProvider for ItemContextProvider {
    fn new_context(&self) -> TelemetryContext {
        let mut context = TelemetryContext::new();
        context.insert_tag(tag_keys::INTERNAL_SDK_VERSION, sdk_version());
        for (key, value) in &self.seed.tags {
            context.insert_tag(key.as_str(), value.as_str());
        }
        for (key, value) in &self.seed.properties {
            context.insert_property(key.as_str(), value.as_str());
        }
        context
    }
}

impl fmt::Debug for ItemContextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemContextProvider")
            .field("tags", &self.seed.tags.len())
            .field("properties", &self.seed.properties.len())
            .finish()
    }
}
