//! Request and response types for catalog ingestion

use crate::sdk::errors::{Result, SDKError};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// One product or price record. The client never looks inside it.
pub type Record = Value;

/// Result of one ingestion call
#[derive(Debug, Clone, PartialEq)]
pub struct IngestResponse {
    raw: Value,
}

impl IngestResponse {
    /// Parse a response body.
    ///
    /// An empty body or a JSON `null` means the service returned nothing and is
    /// an error. Any other non-object value is rejected as well. Everything
    /// inside the object is left for the caller.
    pub fn from_body(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Err(SDKError::EmptyResponse);
        }

        let raw: Value = serde_json::from_str(body)?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        match raw {
            Value::Null => Err(SDKError::EmptyResponse),
            Value::Object(_) => Ok(Self { raw }),
            other => Err(SDKError::InvalidResponse(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Number of records the service accepted.
    ///
    /// An absent or `null` `acceptedCount` counts as zero. A value that is not a
    /// non-negative integer also counts as zero, with a warning.
    pub fn accepted_count(&self) -> u64 {
        match self.raw.get("acceptedCount") {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_u64().unwrap_or_else(|| {
                warn!("Ignoring non-integer acceptedCount in response: {}", value);
                0
            }),
        }
    }

    /// Status reported by the service, e.g. `ACCEPTED`
    pub fn status(&self) -> Option<&str> {
        self.raw.get("status").and_then(Value::as_str)
    }
}

impl fmt::Display for IngestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
