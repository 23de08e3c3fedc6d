//! Elasticsearch REST client handle.

use std::fmt;

use elasticsearch::Elasticsearch;

use crate::errors::RestClientError;
use crate::interfaces::RestClient;
use crate::settings::Settings;
use crate::types::HttpHost;

/// An owned Elasticsearch client together with the endpoints and settings it
/// was built from.
///
/// The underlying [`Elasticsearch`] handle is available until [`close`] is
/// called. Callers borrowing it through a managed holder must not close it
/// themselves.
///
/// [`close`]: RestClient::close
pub struct EsRestClient {
    client: Option<Elasticsearch>,
    hosts: Vec<HttpHost>,
    settings: Settings,
}

impl EsRestClient {
    pub(crate) fn new(client: Elasticsearch, hosts: Vec<HttpHost>, settings: Settings) -> Self {
        Self {
            client: Some(client),
            hosts,
            settings,
        }
    }

    /// The client library handle, or `None` once closed.
    pub fn elasticsearch(&self) -> Option<&Elasticsearch> {
        self.client.as_ref()
    }

    /// The endpoints the client was built for, in configuration order.
    pub fn hosts(&self) -> &[HttpHost] {
        &self.hosts
    }

    /// The settings bundle the client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }
}

impl RestClient for EsRestClient {
    fn close(&mut self) -> Result<(), RestClientError> {
        match self.client.take() {
            Some(_client) => Ok(()),
            None => Err(RestClientError::AlreadyClosed),
        }
    }
}

impl fmt::Debug for EsRestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsRestClient")
            .field("hosts", &self.hosts)
            .field("settings", &self.settings)
            .field("closed", &self.is_closed())
            .finish()
    }
}
