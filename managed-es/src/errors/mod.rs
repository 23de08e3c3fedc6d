//! Error types for the managed Elasticsearch client.

mod address_error;
mod managed_client_error;
mod rest_client_error;
mod settings_error;

pub use address_error::AddressError;
pub use managed_client_error::ManagedClientError;
pub use rest_client_error::RestClientError;
pub use settings_error::SettingsError;
