//! Per-item telemetry context: envelope tags and custom properties.
//!
//! Every item owns its own context; providers hand out a fresh value per item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TelemetryError;

/// Well-known envelope tag keys.
pub mod tag_keys {
    pub const APPLICATION_VERSION: &str = "ai.application.ver";
    pub const CLOUD_ROLE: &str = "ai.cloud.role";
    pub const CLOUD_ROLE_INSTANCE: &str = "ai.cloud.roleInstance";
    pub const DEVICE_ID: &str = "ai.device.id";
    pub const OPERATION_ID: &str = "ai.operation.id";
    pub const OPERATION_NAME: &str = "ai.operation.name";
    pub const SESSION_ID: &str = "ai.session.id";
    pub const USER_ID: &str = "ai.user.id";
    pub const INTERNAL_SDK_VERSION: &str = "ai.internal.sdkVersion";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TelemetryContext {
    tags: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
}

impl TelemetryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn insert_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key.into(), value.into());
    }

    pub fn insert_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}

/// Tags and properties stamped onto every new context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Envelope tags, keyed by `ai.*` names
    #[serde(default)]
    pub tags: BTreeMap<String, String>,

    /// Custom properties
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl ContextConfig {
    pub fn validate(&self) -> Result<(), TelemetryError> {
        for key in self.tags.keys().chain(self.properties.keys()) {
            validate_key(key)?;
        }
        Ok(())
    }
}

/// Reject keys the ingestion endpoint cannot index.
pub(crate) fn validate_key(key: &str) -> Result<(), TelemetryError> {
    if key.trim().is_empty() {
        return Err(TelemetryError::InvalidContext {
            key: key.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }
    if key.chars().any(char::is_control) {
        return Err(TelemetryError::InvalidContext {
            key: key.escape_debug().to_string(),
            reason: "key cannot contain control characters".to_string(),
        });
    }
    Ok(())
}
