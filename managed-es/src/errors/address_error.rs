//! Address error types.
//!
//! This module defines the errors raised while parsing host-and-port
//! descriptors or rendering endpoints as URLs.

use thiserror::Error;

/// Errors that can occur while handling server addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The descriptor is not a valid `host[:port]` string.
    #[error("Invalid host and port '{input}': {reason}")]
    InvalidHostAndPort { input: String, reason: String },

    /// The endpoint cannot be expressed as a URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl AddressError {
    /// Create an invalid host-and-port error.
    pub fn invalid_host_and_port(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHostAndPort {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}
