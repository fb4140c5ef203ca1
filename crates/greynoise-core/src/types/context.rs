use super::str_field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contextual metadata about an IP address, exactly as the API returned it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpContext(Map<String, Value>);

impl IpContext {
    /// The IP address that was looked up
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        str_field(&self.0, "ip")
    }

    /// Whether GreyNoise has seen this address at all
    #[must_use]
    pub fn seen(&self) -> bool {
        self.0.get("seen").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Classification (`benign`, `malicious`, `unknown`)
    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        str_field(&self.0, "classification")
    }

    /// Actor the address is attributed to
    #[must_use]
    pub fn actor(&self) -> Option<&str> {
        str_field(&self.0, "actor")
    }

    #[must_use]
    pub fn first_seen(&self) -> Option<&str> {
        str_field(&self.0, "first_seen")
    }

    #[must_use]
    pub fn last_seen(&self) -> Option<&str> {
        str_field(&self.0, "last_seen")
    }

    /// Behaviour tags; non-string entries are skipped
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.0
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Any field by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
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

impl From<Map<String, Value>> for IpContext {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unseen_context() {
        let ctx: IpContext =
            serde_json::from_str(r#"{"ip":"10.0.0.1","seen":false}"#).unwrap();
        assert!(!ctx.seen());
        assert!(ctx.tags().is_empty());
        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            json!({"ip": "10.0.0.1", "seen": false})
        );
    }

    #[test]
    fn test_seen_context() {
        let ctx: IpContext = serde_json::from_value(json!({
            "ip": "71.6.135.131",
            "seen": true,
            "classification": "benign",
            "actor": "Shodan.io",
            "tags": ["Shodan.io", "Web Scanner"],
            "metadata": {"country": "United States"},
        }))
        .unwrap();
        assert_eq!(ctx.actor(), Some("Shodan.io"));
        assert_eq!(ctx.tags(), vec!["Shodan.io", "Web Scanner"]);
        assert_eq!(ctx.get("metadata").unwrap()["country"], "United States");
    }

    #[test]
    fn test_empty_and_null_fields_kept() {
        let ctx: IpContext = serde_json::from_str("{}").unwrap();
        assert_eq!(serde_json::to_string(&ctx).unwrap(), "{}");

        let ctx: IpContext =
            serde_json::from_str(r#"{"ip":null,"seen":false,"tags":[]}"#).unwrap();
        assert_eq!(ctx.ip(), None);
        assert_eq!(
            serde_json::to_value(&ctx).unwrap(),
            json!({"ip": null, "seen": false, "tags": []})
        );
    }
}
