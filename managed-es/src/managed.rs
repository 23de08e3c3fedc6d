//! Lifecycle-managed Elasticsearch client.
//!
//! A [`ManagedEsClient`] is built eagerly from an [`EsConfiguration`] and
//! registered with the host, which calls [`Managed::stop`] at shutdown to
//! release the client.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::address::http_hosts_from_host_and_ports;
use crate::config::EsConfiguration;
use crate::elasticsearch::{ElasticsearchClientFactory, EsRestClient};
use crate::errors::ManagedClientError;
use crate::interfaces::{Managed, RestClient, RestClientFactory};
use crate::settings::{compose_settings, Settings, SettingsFileResolver, CLUSTER_NAME_KEY};
use crate::types::HttpHost;

/// An Elasticsearch client whose lifetime is driven by the host.
///
/// # Example
///
/// ```ignore
/// use managed_es::{EsConfiguration, HostAndPort, Managed, ManagedEsClient};
///
/// let config = EsConfiguration::new("test")
///     .with_servers(vec![HostAndPort::from_parts("127.0.0.1", 9200)?]);
/// let mut managed = ManagedEsClient::new(&config)?;
///
/// managed.start().await?;
/// // ... serve requests through managed.client() ...
/// managed.stop().await?;
/// ```
#[derive(Debug)]
pub struct ManagedEsClient<C = EsRestClient> {
    client: Option<C>,
    settings: Settings,
    hosts: Vec<HttpHost>,
}

impl ManagedEsClient {
    /// Build a managed client on the Elasticsearch transport, resolving
    /// settings files against the default resource root.
    pub fn new(config: &EsConfiguration) -> Result<Self, ManagedClientError> {
        Self::builder().configuration(config).build()
    }

    pub fn builder<'a>() -> ManagedEsClientBuilder<'a> {
        ManagedEsClientBuilder::default()
    }
}

impl<C: RestClient> ManagedEsClient<C> {
    /// The client, until the component is stopped.
    ///
    /// The handle is owned by this component; close it through `stop`.
    pub fn client(&self) -> Option<&C> {
        self.client.as_ref()
    }

    /// The settings bundle assembled at construction.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The endpoints handed to the client factory.
    pub fn hosts(&self) -> &[HttpHost] {
        &self.hosts
    }

    pub fn is_running(&self) -> bool {
        self.client.is_some()
    }
}

#[async_trait]
impl<C: RestClient> Managed for ManagedEsClient<C> {
    type Error = ManagedClientError;

    async fn start(&mut self) -> Result<(), ManagedClientError> {
        // The client is created at construction.
        debug!("Managed Elasticsearch client started");
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), ManagedClientError> {
        let Some(mut client) = self.client.take() else {
            return Ok(());
        };

        client.close().map_err(|e| {
            error!(error = %e, "Failed to close Elasticsearch client");
            ManagedClientError::Stop(e)
        })?;

        info!("Managed Elasticsearch client stopped");
        Ok(())
    }
}

/// Builder for [`ManagedEsClient`].
pub struct ManagedEsClientBuilder<'a, F = ElasticsearchClientFactory> {
    configuration: Option<&'a EsConfiguration>,
    resolver: SettingsFileResolver,
    factory: F,
}

impl Default for ManagedEsClientBuilder<'_> {
    fn default() -> Self {
        Self {
            configuration: None,
            resolver: SettingsFileResolver::default(),
            factory: ElasticsearchClientFactory::new(),
        }
    }
}

impl<'a, F: RestClientFactory> ManagedEsClientBuilder<'a, F> {
    pub fn configuration(mut self, configuration: &'a EsConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Directories searched for settings files given by resource name.
    pub fn resource_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.resolver = SettingsFileResolver::new(roots);
        self
    }

    /// Replace the factory that builds the underlying client.
    pub fn client_factory<G: RestClientFactory>(self, factory: G) -> ManagedEsClientBuilder<'a, G> {
        ManagedEsClientBuilder {
            configuration: self.configuration,
            resolver: self.resolver,
            factory,
        }
    }

    /// Assemble the settings and endpoints and build the client.
    ///
    /// # Returns
    ///
    /// * `Ok(ManagedEsClient)` - A running managed client
    /// * `Err(ManagedClientError::MissingArgument)` - If no configuration was given
    /// * `Err(ManagedClientError::InvalidArgument)` - If the configuration or settings file is unusable
    /// * `Err(ManagedClientError::Construction)` - If the factory rejects the inputs
    pub fn build(self) -> Result<ManagedEsClient<F::Client>, ManagedClientError> {
        let config = self
            .configuration
            .ok_or_else(|| ManagedClientError::missing_argument("EsConfiguration must not be null"))?;
        config.validate()?;

        let settings = self.assemble_settings(config)?;
        let hosts = http_hosts_from_host_and_ports(Some(&config.servers));

        let client = self
            .factory
            .build(&hosts, &settings)
            .map_err(ManagedClientError::Construction)?;

        info!(
            cluster_name = %config.cluster_name,
            servers = hosts.len(),
            settings = settings.len(),
            "Created managed Elasticsearch client"
        );

        Ok(ManagedEsClient {
            client: Some(client),
            settings,
            hosts,
        })
    }

    fn assemble_settings(&self, config: &EsConfiguration) -> Result<Settings, ManagedClientError> {
        let file = match config.settings_file.as_deref() {
            Some(name) if !name.is_empty() => self.load_settings_file(name)?,
            _ => Settings::default(),
        };
        let inline: Settings = config.settings.iter().collect();
        let synthetic = Settings::builder()
            .put(CLUSTER_NAME_KEY, config.cluster_name.as_str())
            .build();

        Ok(compose_settings(&file, &inline, &synthetic))
    }

    fn load_settings_file(&self, name: &str) -> Result<Settings, ManagedClientError> {
        let path = self
            .resolver
            .resolve(name)
            .map_err(|e| ManagedClientError::invalid_settings("settings file cannot be found", e))?;

        Settings::builder()
            .load_from_path(&path)
            .map(|builder| builder.build())
            .map_err(|e| ManagedClientError::invalid_settings("exception loading file", e))
    }
}
