//! Telemetry items and the capability set envelope builders consume.
//!
//! Four variants exist: traces (`Message`), events, metrics and requests. Each
//! embeds a [`BaseTelemetry`] and a versioned payload. Construction is the only
//! way to obtain an item and items are immutable afterwards.

mod base;
mod event;
mod item;
mod metric;
mod request;
mod trace;

use chrono::{DateTime, Utc};

use crate::context::TelemetryContext;
use crate::contracts::Domain;

pub use base::BaseTelemetry;
pub use event::EventTelemetry;
pub use item::TelemetryItem;
pub use metric::MetricTelemetry;
pub use request::RequestTelemetry;
pub use trace::TraceTelemetry;

/// Uniform surface of every telemetry item.
///
/// An envelope serializer needs nothing beyond these four queries, none of
/// which has side effects.
pub trait Telemetry {
    /// Instant the item was constructed.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Context owned by this item.
    fn context(&self) -> &TelemetryContext;

    /// Envelope `baseType`: one of `Message`, `Event`, `Metric`, `Request`.
    fn base_type_name(&self) -> &'static str;

    /// Envelope `baseData`.
    fn base_data(&self) -> Domain<'_>;
}
