//! Payload types carried as `baseData` inside an envelope.
//!
//! Fields are crate-private: payloads are only built by the item constructors,
//! which stamp [`SCHEMA_VERSION`] and never change it afterwards.

use serde::Serialize;

/// Schema version stamped on every payload.
pub const SCHEMA_VERSION: i32 = 2;

/// Severity attached to a trace message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SeverityLevel {
    Verbose,
    #[default]
    Information,
    Warning,
    Error,
    Critical,
}

impl SeverityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Verbose => "Verbose",
            SeverityLevel::Information => "Information",
            SeverityLevel::Warning => "Warning",
            SeverityLevel::Error => "Error",
            SeverityLevel::Critical => "Critical",
        }
    }
}

impl std::str::FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(SeverityLevel::Verbose),
            "information" | "info" => Ok(SeverityLevel::Information),
            "warning" | "warn" => Ok(SeverityLevel::Warning),
            "error" => Ok(SeverityLevel::Error),
            "critical" => Ok(SeverityLevel::Critical),
            other => Err(format!("unknown severity level: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub(crate) ver: i32,
    pub(crate) message: String,
    pub(crate) severity_level: SeverityLevel,
}

impl MessageData {
    pub(crate) fn new(message: String, severity_level: SeverityLevel) -> Self {
        Self {
            ver: SCHEMA_VERSION,
            message,
            severity_level,
        }
    }

    pub fn ver(&self) -> i32 {
        self.ver
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity_level(&self) -> SeverityLevel {
        self.severity_level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub(crate) ver: i32,
    pub(crate) name: String,
}

impl EventData {
    pub(crate) fn new(name: String) -> Self {
        Self {
            ver: SCHEMA_VERSION,
            name,
        }
    }

    pub fn ver(&self) -> i32 {
        self.ver
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One measurement inside a metric payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub(crate) name: String,
    pub(crate) value: f32,
    pub(crate) count: i32,
}

impl DataPoint {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Number of samples folded into this point; 1 for a single measurement.
    pub fn count(&self) -> i32 {
        self.count
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricData {
    pub(crate) ver: i32,
    pub(crate) metrics: Vec<DataPoint>,
}

impl MetricData {
    pub(crate) fn single(name: String, value: f32) -> Self {
        Self {
            ver: SCHEMA_VERSION,
            metrics: vec![DataPoint {
                name,
                value,
                count: 1,
            }],
        }
    }

    pub fn ver(&self) -> i32 {
        self.ver
    }

    pub fn metrics(&self) -> &[DataPoint] {
        &self.metrics
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    pub(crate) ver: i32,
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) start_time: String,
    pub(crate) duration: String,
    pub(crate) response_code: String,
    pub(crate) success: bool,
}

impl RequestData {
    pub fn ver(&self) -> i32 {
        self.ver
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// RFC 3339 start instant supplied by the caller.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Elapsed time in `DD.HH:MM:SS.ffff` form.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn response_code(&self) -> &str {
        &self.response_code
    }

    pub fn success(&self) -> bool {
        self.success
    }
}
