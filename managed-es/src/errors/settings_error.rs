//! Settings error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving or loading a settings document.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Neither a filesystem path nor a resource of that name exists.
    #[error("Settings file not found: {0}")]
    NotFound(String),

    /// The settings document could not be read.
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid YAML or JSON, or has an unusable shape.
    #[error("Failed to parse settings file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The file extension does not name a supported settings format.
    #[error("Unsupported settings format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl SettingsError {
    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create an I/O error for the given path.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a parse error for the given path.
    pub fn parse(path: &Path, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: msg.into(),
        }
    }
}
