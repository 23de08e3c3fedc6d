//! Elasticsearch client factory.

use elasticsearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    Elasticsearch,
};
use tracing::{info, warn};
use url::Url;

use crate::elasticsearch::EsRestClient;
use crate::errors::RestClientError;
use crate::interfaces::RestClientFactory;
use crate::settings::Settings;
use crate::types::HttpHost;

/// Address used when no servers are configured. Port 9200 is the client
/// library's HTTP default, not the 9300 transport default of the normalizer.
pub const DEFAULT_ADDRESS: &str = "http://localhost:9200";

/// Builds [`EsRestClient`]s on the `elasticsearch` crate's transport.
///
/// Requests go to the first configured endpoint through a single-node
/// connection pool. Every endpoint is still validated, so a malformed one
/// fails construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElasticsearchClientFactory;

impl ElasticsearchClientFactory {
    pub fn new() -> Self {
        Self
    }
}

/// Validate every endpoint and pick the one the transport connects to.
///
/// Only the first endpoint reaches the single-node pool; the rest are logged
/// as ignored. With no endpoints the client library default is used.
fn primary_endpoint(hosts: &[HttpHost]) -> Result<Url, RestClientError> {
    let urls = hosts
        .iter()
        .map(|host| {
            host.to_url()
                .map_err(|e| RestClientError::invalid_endpoint(e.to_string()))
        })
        .collect::<Result<Vec<Url>, _>>()?;

    let mut urls = urls.into_iter();
    match urls.next() {
        Some(url) => {
            let ignored: Vec<String> = urls.map(|u| u.to_string()).collect();
            if !ignored.is_empty() {
                warn!(
                    url = %url,
                    ignored = ignored.len(),
                    ignored_hosts = ?ignored,
                    "Single-node transport uses the first server only"
                );
            }
            Ok(url)
        }
        None => {
            warn!(
                url = DEFAULT_ADDRESS,
                "No servers configured, using the default Elasticsearch address"
            );
            Url::parse(DEFAULT_ADDRESS).map_err(|e| RestClientError::invalid_endpoint(e.to_string()))
        }
    }
}

impl RestClientFactory for ElasticsearchClientFactory {
    type Client = EsRestClient;

    fn build(&self, hosts: &[HttpHost], settings: &Settings) -> Result<EsRestClient, RestClientError> {
        let url = primary_endpoint(hosts)?;

        let conn_pool = SingleNodeConnectionPool::new(url.clone());
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| RestClientError::transport(e.to_string()))?;

        // The transport has no settings hook; the bundle is kept on the
        // client until an application point exists.
        if !settings.is_empty() {
            warn!(
                keys = settings.len(),
                "Settings bundle is not applied to the Elasticsearch transport"
            );
        }

        info!(
            url = %url,
            hosts = hosts.len(),
            "Created Elasticsearch client"
        );

        Ok(EsRestClient::new(
            Elasticsearch::new(transport),
            hosts.to_vec(),
            settings.clone(),
        ))
    }
}
