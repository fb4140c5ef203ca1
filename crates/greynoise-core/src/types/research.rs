use super::str_field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named entity associated with a cluster of scanning IP addresses,
/// exactly as the API returned it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(Map<String, Value>);

impl Actor {
    /// Actor name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        str_field(&self.0, "name")
    }

    /// Addresses attributed to the actor
    #[must_use]
    pub fn ips(&self) -> Vec<&str> {
        self.0
            .get("ips")
            .and_then(Value::as_array)
            .map(|ips| ips.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
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

impl From<Map<String, Value>> for Actor {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
