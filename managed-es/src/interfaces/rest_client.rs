//! REST client traits.

use crate::errors::RestClientError;
use crate::settings::Settings;
use crate::types::HttpHost;

/// A REST client handle that must be released explicitly.
pub trait RestClient: Send + Sync {
    /// Release the client's resources.
    fn close(&mut self) -> Result<(), RestClientError>;
}

/// Builds a [`RestClient`] from the normalized endpoints.
///
/// The assembled settings bundle is passed alongside the endpoints so a
/// factory can apply whatever part of it its client library understands.
pub trait RestClientFactory: Send + Sync {
    /// The client this factory produces.
    type Client: RestClient;

    /// Build a client for `hosts`, in the given order.
    fn build(&self, hosts: &[HttpHost], settings: &Settings) -> Result<Self::Client, RestClientError>;
}
