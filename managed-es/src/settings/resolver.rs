//! Settings file resolution.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::SettingsError;

/// Resource root searched when no other roots are configured.
pub const DEFAULT_RESOURCE_ROOT: &str = "resources";

/// Resolves a configured settings file name to a path.
///
/// The name is first tried as a filesystem path. If nothing exists there it
/// is treated as a resource name: a leading `/` is stripped and the remainder
/// is looked up under each resource root in order.
#[derive(Debug, Clone)]
pub struct SettingsFileResolver {
    resource_roots: Vec<PathBuf>,
}

impl Default for SettingsFileResolver {
    fn default() -> Self {
        Self {
            resource_roots: vec![PathBuf::from(DEFAULT_RESOURCE_ROOT)],
        }
    }
}

impl SettingsFileResolver {
    /// Create a resolver searching the given resource roots.
    pub fn new<I, P>(resource_roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            resource_roots: resource_roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn resource_roots(&self) -> &[PathBuf] {
        &self.resource_roots
    }

    /// Resolve `name` to an existing path.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, SettingsError> {
        let path = Path::new(name);
        if path.exists() {
            debug!(path = %path.display(), "Resolved settings file on filesystem");
            return Ok(path.to_path_buf());
        }

        let resource = name.trim_start_matches('/');
        if !resource.is_empty() {
            for root in &self.resource_roots {
                let candidate = root.join(resource);
                if candidate.exists() {
                    debug!(
                        resource = %resource,
                        path = %candidate.display(),
                        "Resolved settings file as resource"
                    );
                    return Ok(candidate);
                }
            }
        }

        Err(SettingsError::not_found(name))
    }
}
