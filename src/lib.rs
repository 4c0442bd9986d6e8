//! Appinsights: telemetry data contracts
//!
//! Builds trace, event, metric and request items with a consistent timestamp,
//! a versioned payload and an owned context, ready for an envelope serializer
//! to pick up through the [`telemetry::Telemetry`] capability set.

pub mod cli;
pub mod config;
pub mod context;
pub mod contracts;
pub mod error;
pub mod factory;
pub mod logging;
pub mod providers;
pub mod telemetry;

pub use context::TelemetryContext;
pub use contracts::{Domain, SeverityLevel, SCHEMA_VERSION};
pub use error::TelemetryError;
pub use factory::ItemFactory;
pub use telemetry::{
    EventTelemetry, MetricTelemetry, RequestTelemetry, Telemetry, TelemetryItem, TraceTelemetry,
};
