//! Managed client error types.
//!
//! This module defines the errors surfaced to the host while constructing
//! or stopping a managed client.

use thiserror::Error;

use super::{RestClientError, SettingsError};

/// Errors that can occur during managed client construction or shutdown.
#[derive(Error, Debug)]
pub enum ManagedClientError {
    /// A required argument was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// A configuration value is unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        #[source]
        source: Option<SettingsError>,
    },

    /// The client library rejected the inputs.
    #[error(transparent)]
    Construction(RestClientError),

    /// Closing the client failed.
    #[error("Stop error: {0}")]
    Stop(#[source] RestClientError),
}

impl ManagedClientError {
    /// Create a missing argument error.
    pub fn missing_argument(msg: impl Into<String>) -> Self {
        Self::MissingArgument(msg.into())
    }

    /// Create an invalid argument error with no underlying cause.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
            source: None,
        }
    }

    /// Create an invalid argument error caused by a settings failure.
    pub fn invalid_settings(msg: impl Into<String>, source: SettingsError) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
            source: Some(source),
        }
    }
}
