//! Interface definitions for the lifecycle and client seams.
//!
//! `Managed` is the capability the host drives at startup and shutdown.
//! `RestClient` and `RestClientFactory` abstract the client library so the
//! managed holder can be exercised without a cluster.

mod managed;
mod rest_client;

pub use managed::Managed;
pub use rest_client::{RestClient, RestClientFactory};
