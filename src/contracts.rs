//! Wire data contracts: payload types, the payload union and time encodings.

mod data;

pub mod domain;
pub mod duration;

pub use data::{
    DataPoint, EventData, MessageData, MetricData, RequestData, SeverityLevel, SCHEMA_VERSION,
};
pub use domain::{base_type, Domain};
pub use duration::{format_duration, format_rfc3339_nano};
