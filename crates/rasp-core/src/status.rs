use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

// ---------------------------------------------------------------------------
// StatusReport
// ---------------------------------------------------------------------------

/// Body of `POST /rasp/status` as sent by the device reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub cpu: String,
    pub disk: String,
    pub memory: String,
    pub boot_time: String,
}

impl StatusReport {
    /// Decode a raw request body. Every field must be present and a string.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidReport(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// DeviceStatus
// ---------------------------------------------------------------------------

/// Last-known device status. `timestamp` is `None` until the first report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub cpu: String,
    pub disk: String,
    pub memory: String,
    pub boot_time: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl DeviceStatus {
    pub fn from_report(report: StatusReport, at: DateTime<Utc>) -> Self {
        Self {
            cpu: report.cpu,
            disk: report.disk,
            memory: report.memory,
            boot_time: report.boot_time,
            timestamp: Some(at),
        }
    }

    /// True until a report has been accepted.
    pub fn is_unset(&self) -> bool {
        self.timestamp.is_none()
    }
}
