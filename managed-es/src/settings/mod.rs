//! Elasticsearch client settings.
//!
//! A [`Settings`] bundle is composed from up to three layers, lowest
//! precedence first: a settings document, the inline settings of the
//! configuration, and the synthetic `cluster.name` binding.

mod loader;
mod resolver;

use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::SettingsError;

pub use loader::load_settings_file;
pub use resolver::{SettingsFileResolver, DEFAULT_RESOURCE_ROOT};

/// Key under which the cluster name is bound.
pub const CLUSTER_NAME_KEY: &str = "cluster.name";

/// An ordered key/value settings bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

impl Settings {
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Look up a setting.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Settings::builder().put_all(iter).build()
    }
}

/// Builder for [`Settings`]. Each write overrides any earlier value for the
/// same key.
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    entries: BTreeMap<String, String>,
}

impl SettingsBuilder {
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn put_all<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merge an existing bundle into this one.
    pub fn put_settings(self, settings: &Settings) -> Self {
        self.put_all(settings.iter())
    }

    /// Load a YAML or JSON settings document.
    pub fn load_from_path(self, path: &Path) -> Result<Self, SettingsError> {
        let loaded = load_settings_file(path)?;
        Ok(self.put_all(loaded))
    }

    pub fn build(self) -> Settings {
        Settings {
            entries: self.entries,
        }
    }
}

/// Compose settings layers. For every key the result holds the `synthetic`
/// value if present, else the `inline` value, else the `file` value.
pub fn compose_settings(file: &Settings, inline: &Settings, synthetic: &Settings) -> Settings {
    Settings::builder()
        .put_settings(file)
        .put_settings(inline)
        .put_settings(synthetic)
        .build()
}
