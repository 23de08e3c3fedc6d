//! Configuration types for the managed Elasticsearch client.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ManagedClientError;
use crate::types::HostAndPort;

/// Cluster name used when a configuration document omits it.
pub const DEFAULT_CLUSTER_NAME: &str = "elasticsearch";

fn default_cluster_name() -> String {
    DEFAULT_CLUSTER_NAME.to_string()
}

/// Configuration for a managed Elasticsearch client.
///
/// Deserializes from the host's configuration document with camelCase keys:
///
/// ```yaml
/// clusterName: test
/// servers:
///   - 127.0.0.1:9300
///   - es-2.internal
/// settingsFile: /custom_settings_file.yml
/// settings:
///   transport.tcp.port: 29300-29400
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsConfiguration {
    /// Name of the target cluster. Must not be empty.
    #[serde(default = "default_cluster_name")]
    pub cluster_name: String,

    /// Server endpoints in `host[:port]` form.
    #[serde(default)]
    pub servers: Vec<HostAndPort>,

    /// Settings document, as a filesystem path or a resource name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<String>,

    /// Inline settings, overriding values from the settings file.
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

impl Default for EsConfiguration {
    fn default() -> Self {
        Self {
            cluster_name: default_cluster_name(),
            servers: Vec::new(),
            settings_file: None,
            settings: HashMap::new(),
        }
    }
}

impl EsConfiguration {
    /// Create a config for the named cluster with no servers or settings.
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            ..Default::default()
        }
    }

    pub fn with_servers(mut self, servers: Vec<HostAndPort>) -> Self {
        self.servers = servers;
        self
    }

    pub fn with_settings_file(mut self, settings_file: impl Into<String>) -> Self {
        self.settings_file = Some(settings_file.into());
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Check the fields the client depends on.
    pub fn validate(&self) -> Result<(), ManagedClientError> {
        if self.cluster_name.trim().is_empty() {
            return Err(ManagedClientError::invalid_argument(
                "clusterName must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let yaml = r#"
clusterName: test
servers:
  - 127.0.0.1:9300
  - 127.0.0.1:9301
  - es-3.internal
settingsFile: /custom_settings_precedence.yml
settings:
  transport.tcp.port: 29300-29400
"#;
        let config: EsConfiguration = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.cluster_name, "test");
        assert_eq!(
            config.servers,
            vec![
                HostAndPort::from_parts("127.0.0.1", 9300).unwrap(),
                HostAndPort::from_parts("127.0.0.1", 9301).unwrap(),
                HostAndPort::from_host("es-3.internal").unwrap(),
            ]
        );
        assert_eq!(
            config.settings_file.as_deref(),
            Some("/custom_settings_precedence.yml")
        );
        assert_eq!(
            config.settings.get("transport.tcp.port").map(String::as_str),
            Some("29300-29400")
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: EsConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EsConfiguration::default());
        assert_eq!(config.cluster_name, DEFAULT_CLUSTER_NAME);
    }

    #[test]
    fn test_deserialize_rejects_bad_server() {
        let result = serde_json::from_str::<EsConfiguration>(r#"{"servers": ["host:notaport"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_servers_as_strings() {
        let config = EsConfiguration::new("test")
            .with_servers(vec![HostAndPort::from_parts("::1", 9300).unwrap()]);
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["clusterName"], "test");
        assert_eq!(json["servers"][0], "[::1]:9300");
        assert!(json.get("settingsFile").is_none());
    }

    #[test]
    fn test_validate_cluster_name() {
        assert!(EsConfiguration::new("test").validate().is_ok());

        let err = EsConfiguration::new(" ").validate().unwrap_err();
        assert!(err.to_string().contains("clusterName"));
    }
}
