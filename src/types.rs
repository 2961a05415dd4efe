//! Core types for healthmock

use serde::{Deserialize, Serialize};

/// Identity metadata reported by the mocked service.
///
/// Every field is an opaque label. Absent fields decode as empty strings, so an
/// update body always yields a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceRecord {
    pub platform: String,
    pub release: String,
    pub schema: String,
}

impl ServiceRecord {
    pub fn new(
        platform: impl Into<String>,
        release: impl Into<String>,
        schema: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            release: release.into(),
            schema: schema.into(),
        }
    }

    /// The record served from process start until the first update
    pub fn initial() -> Self {
        Self::new("3.12.3", "1.0.0", "initial_schema")
    }
}

/// Acknowledgement returned by a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub status: String,
    pub message: String,
}

impl UpdateResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "Service updated successfully".to_string(),
        }
    }
}
