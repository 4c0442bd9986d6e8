//! Borrowed view over any payload, tagged by its wire family.

use serde::Serialize;

use crate::contracts::data::{EventData, MessageData, MetricData, RequestData};

/// `baseType` literals understood by the ingestion endpoint.
pub mod base_type {
    pub const MESSAGE: &str = "Message";
    pub const EVENT: &str = "Event";
    pub const METRIC: &str = "Metric";
    pub const REQUEST: &str = "Request";
}

/// Payload of a telemetry item, as handed to an envelope serializer.
///
/// Serializes as the bare payload object; the tag travels separately as the
/// envelope's `baseType`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Domain<'a> {
    Message(&'a MessageData),
    Event(&'a EventData),
    Metric(&'a MetricData),
    Request(&'a RequestData),
}

impl Domain<'_> {
    pub fn version(&self) -> i32 {
        match self {
            Domain::Message(data) => data.ver(),
            Domain::Event(data) => data.ver(),
            Domain::Metric(data) => data.ver(),
            Domain::Request(data) => data.ver(),
        }
    }

    /// Wire family of the wrapped payload.
    pub fn base_type(&self) -> &'static str {
        match self {
            Domain::Message(_) => base_type::MESSAGE,
            Domain::Event(_) => base_type::EVENT,
            Domain::Metric(_) => base_type::METRIC,
            Domain::Request(_) => base_type::REQUEST,
        }
    }
}
