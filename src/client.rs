//! Client configuration factory

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::VERSION;

/// Caller-supplied client options
pub type ClientOptions = Map<String, Value>;

/// Client configuration: the caller's options stamped with the SDK version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientConfig(Map<String, Value>);

impl ClientConfig {
    /// Get an option by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The version stamp, if it is a string
    pub fn version(&self) -> Option<&str> {
        self.0.get("version").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Create a client configuration for Minions Venues
///
/// The result holds `version` plus every option passed in. Options are merged
/// as-is after the stamp, so a caller-supplied `version` key wins.
pub fn create_client(options: ClientOptions) -> ClientConfig {
    let mut config = Map::with_capacity(options.len() + 1);
    config.insert("version".to_string(), Value::String(VERSION.to_string()));
    config.extend(options);
    ClientConfig(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> ClientOptions {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_create_client_defaults() {
        let client = create_client(ClientOptions::new());
        assert_eq!(client.len(), 1);
        assert_eq!(client.version(), Some("0.1.0"));
    }

    #[test]
    fn test_create_client_with_options() {
        let client = create_client(options(json!({"debug": true})));
        assert_eq!(client.get("debug"), Some(&Value::Bool(true)));
        assert_eq!(client.version(), Some("0.1.0"));
    }

    #[test]
    fn test_options_preserved() {
        let input = options(json!({
            "debug": false,
            "timeout": 30,
            "endpoint": "https://example.invalid",
            "tags": ["a", "b"],
            "": null
        }));
        let client = create_client(input.clone());
        for (key, value) in &input {
            assert_eq!(client.get(key), Some(value), "key {key:?}");
        }
        assert_eq!(client.len(), input.len() + 1);
    }

    #[test]
    fn test_caller_version_is_kept() {
        let client = create_client(options(json!({"version": "9.9.9"})));
        assert_eq!(client.version(), Some("9.9.9"));
        assert_eq!(client.len(), 1);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let client = create_client(options(json!({"debug": true})));
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json, json!({"version": "0.1.0", "debug": true}));
    }
}
