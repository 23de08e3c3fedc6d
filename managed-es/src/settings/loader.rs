//! Settings document loading.
//!
//! YAML (`.yml`, `.yaml`) and JSON (`.json`) documents are supported. Nested
//! mappings flatten to dotted keys and sequences to indexed keys, so
//!
//! ```yaml
//! transport:
//!   tcp:
//!     port: 19300-19400
//! discovery.seed_hosts: [a, b]
//! ```
//!
//! yields `transport.tcp.port`, `discovery.seed_hosts.0` and
//! `discovery.seed_hosts.1`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use crate::errors::SettingsError;

enum Format {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Option<Format> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "yml" | "yaml" => Some(Format::Yaml),
        "json" => Some(Format::Json),
        _ => None,
    }
}

/// Load and flatten a settings document.
pub fn load_settings_file(path: &Path) -> Result<BTreeMap<String, String>, SettingsError> {
    let format = detect_format(path).ok_or_else(|| SettingsError::UnsupportedFormat(path.to_path_buf()))?;

    let contents = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    // JSON documents go through the same value model as YAML.
    let document: Value = match format {
        Format::Yaml => serde_yaml::from_str(&contents).map_err(|e| SettingsError::parse(path, e.to_string()))?,
        Format::Json => serde_json::from_str(&contents).map_err(|e| SettingsError::parse(path, e.to_string()))?,
    };

    let mut settings = BTreeMap::new();
    match document {
        Value::Null => {}
        Value::Mapping(_) => flatten(path, None, &document, &mut settings)?,
        _ => {
            return Err(SettingsError::parse(
                path,
                "settings document must be a mapping",
            ))
        }
    }

    debug!(path = %path.display(), keys = settings.len(), "Loaded settings file");
    Ok(settings)
}

fn flatten(
    path: &Path,
    prefix: Option<&str>,
    value: &Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), SettingsError> {
    let join = |key: &str| match prefix {
        Some(prefix) => format!("{}.{}", prefix, key),
        None => key.to_string(),
    };

    match value {
        Value::Null => {}
        Value::Bool(b) => insert(prefix, b.to_string(), out),
        Value::Number(n) => insert(prefix, n.to_string(), out),
        Value::String(s) => insert(prefix, s.clone(), out),
        Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(path, Some(&join(&index.to_string())), item, out)?;
            }
        }
        Value::Mapping(mapping) => {
            for (key, item) in mapping {
                let key = scalar_key(key).ok_or_else(|| {
                    SettingsError::parse(path, format!("unsupported key {:?}", key))
                })?;
                flatten(path, Some(&join(&key)), item, out)?;
            }
        }
        Value::Tagged(tagged) => flatten(path, prefix, &tagged.value, out)?,
    }

    Ok(())
}

fn insert(prefix: Option<&str>, value: String, out: &mut BTreeMap<String, String>) {
    if let Some(key) = prefix {
        out.insert(key.to_string(), value);
    }
}

fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn write_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_flat_yaml() {
        let file = write_file(".yml", "transport.tcp.port: 19300-19400\npath.home: target/data/yaml\n");
        let settings = load_settings_file(file.path()).unwrap();

        assert_eq!(settings.get("transport.tcp.port").map(String::as_str), Some("19300-19400"));
        assert_eq!(settings.get("path.home").map(String::as_str), Some("target/data/yaml"));
    }

    #[test]
    fn test_load_nested_yaml() {
        let file = write_file(
            ".yaml",
            "transport:\n  tcp:\n    port: 9300\nnode:\n  master: true\n  roles: [data, ingest]\nunset: ~\n",
        );
        let settings = load_settings_file(file.path()).unwrap();

        assert_eq!(settings.get("transport.tcp.port").map(String::as_str), Some("9300"));
        assert_eq!(settings.get("node.master").map(String::as_str), Some("true"));
        assert_eq!(settings.get("node.roles.0").map(String::as_str), Some("data"));
        assert_eq!(settings.get("node.roles.1").map(String::as_str), Some("ingest"));
        assert!(!settings.contains_key("unset"));
        assert_eq!(settings.len(), 4);
    }

    #[test]
    fn test_load_json() {
        let file = write_file(".json", r#"{"cluster": {"name": "json"}, "http.port": 9200}"#);
        let settings = load_settings_file(file.path()).unwrap();

        assert_eq!(settings.get("cluster.name").map(String::as_str), Some("json"));
        assert_eq!(settings.get("http.port").map(String::as_str), Some("9200"));
    }

    #[test]
    fn test_empty_document() {
        let file = write_file(".yml", "");
        assert!(load_settings_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_file(".properties", "a=b\n");
        assert!(matches!(
            load_settings_file(file.path()),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_malformed_documents() {
        let broken = write_file(".yml", "a: [unclosed\n");
        assert!(matches!(load_settings_file(broken.path()), Err(SettingsError::Parse { .. })));

        let scalar = write_file(".yml", "just a string\n");
        assert!(matches!(load_settings_file(scalar.path()), Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.yml");
        assert!(matches!(load_settings_file(&missing), Err(SettingsError::Io { .. })));
    }
}
