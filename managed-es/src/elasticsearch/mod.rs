//! Elasticsearch implementation of the REST client seam.
//!
//! This module provides the production `RestClientFactory` backed by the
//! `elasticsearch` crate.

mod client;
mod factory;

pub use client::EsRestClient;
pub use factory::{ElasticsearchClientFactory, DEFAULT_ADDRESS};
