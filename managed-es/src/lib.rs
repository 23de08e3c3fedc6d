//! # Managed Elasticsearch Client
//!
//! This crate builds an Elasticsearch REST client from a declarative
//! configuration and ties its lifetime to the host's managed-component
//! lifecycle. It includes the configuration types, the settings bundle and
//! its precedence rules, address conversion helpers, and an implementation
//! on the `elasticsearch` crate.

pub mod address;
pub mod config;
pub mod elasticsearch;
pub mod errors;
pub mod interfaces;
pub mod managed;
pub mod settings;
pub mod types;

pub use crate::config::EsConfiguration;
pub use crate::elasticsearch::{ElasticsearchClientFactory, EsRestClient};
pub use crate::errors::{AddressError, ManagedClientError, RestClientError, SettingsError};
pub use crate::interfaces::{Managed, RestClient, RestClientFactory};
pub use crate::managed::{ManagedEsClient, ManagedEsClientBuilder};
pub use crate::settings::{Settings, SettingsBuilder};
pub use crate::types::{HostAndPort, HttpHost, TransportAddress};
