use super::str_field;
use crate::codes::describe_code;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of the bulk noise dump
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoisePage {
    /// IP addresses on this page
    #[serde(default)]
    pub noise_ips: Vec<String>,

    /// Offset to request the next page with
    #[serde(default)]
    pub offset: Option<u64>,

    /// Whether this is the last page
    pub complete: bool,
}

/// Quick-check result for a single IP address.
///
/// The object is kept exactly as the API returned it; the accessors only
/// read from it. [`with_code_message`](Self::with_code_message) is the one
/// addition, and it serializes back alongside the original fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseStatus(Map<String, Value>);

impl NoiseStatus {
    /// Add `code_message` describing the status code.
    ///
    /// Objects without a `code` field are left untouched.
    #[must_use]
    pub fn with_code_message(mut self) -> Self {
        let message = match self.0.get("code") {
            Some(Value::String(code)) => describe_code(code),
            Some(other) => describe_code(&other.to_string()),
            None => return self,
        };
        self.0.insert("code_message".into(), Value::String(message));
        self
    }

    /// The IP address that was checked
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        str_field(&self.0, "ip")
    }

    /// Returns true if the address was observed as noise
    #[must_use]
    pub fn is_noise(&self) -> bool {
        self.0.get("noise").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Quick-check status code (e.g. `0x01`)
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        str_field(&self.0, "code")
    }

    /// Description of [`code`](Self::code)
    #[must_use]
    pub fn code_message(&self) -> Option<&str> {
        str_field(&self.0, "code_message")
    }

    /// The underlying JSON object
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for NoiseStatus {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
