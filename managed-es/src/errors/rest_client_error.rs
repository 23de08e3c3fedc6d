//! REST client error types.

use thiserror::Error;

/// Errors raised by a REST client or the factory that builds it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RestClientError {
    /// The transport could not be built.
    #[error("Transport error: {0}")]
    Transport(String),

    /// An endpoint was rejected by the client library.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The client has already been closed.
    #[error("Client already closed")]
    AlreadyClosed,

    /// Closing the client failed.
    #[error("Close error: {0}")]
    Close(String),
}

impl RestClientError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
        Self::InvalidEndpoint(msg.into())
    }

    /// Create a close error.
    pub fn close(msg: impl Into<String>) -> Self {
        Self::Close(msg.into())
    }
}
