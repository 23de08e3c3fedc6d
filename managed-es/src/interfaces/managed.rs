//! Managed component trait definition.

use async_trait::async_trait;

/// A component whose startup and shutdown the host sequences.
///
/// The host calls `start` while bringing the service up, in registration
/// order relative to other managed components, and `stop` after the service
/// no longer accepts requests. Errors are reported to the host, which decides
/// whether to abort startup or log and continue shutting down.
#[async_trait]
pub trait Managed: Send {
    /// Error reported to the host.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Start the component.
    async fn start(&mut self) -> Result<(), Self::Error>;

    /// Stop the component and release its resources.
    async fn stop(&mut self) -> Result<(), Self::Error>;
}
