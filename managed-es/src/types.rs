//! Address types consumed by the Elasticsearch client.

use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::AddressError;

/// A host with an optional port, as written in configuration (`host[:port]`).
///
/// IPv6 literals may be written in brackets (`[::1]:9300`), or bare when no
/// port is given (`::1`). The host is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HostAndPort {
    host: String,
    port: Option<u16>,
}

impl HostAndPort {
    /// Create a descriptor from a host and an explicit port.
    pub fn from_parts(host: impl Into<String>, port: u16) -> Result<Self, AddressError> {
        Self::new(host, Some(port))
    }

    /// Create a descriptor with no port.
    pub fn from_host(host: impl Into<String>) -> Result<Self, AddressError> {
        Self::new(host, None)
    }

    fn new(host: impl Into<String>, port: Option<u16>) -> Result<Self, AddressError> {
        let host = host.into();
        if host.is_empty() {
            return Err(AddressError::invalid_host_and_port(host, "host is empty"));
        }
        Ok(Self { host, port })
    }

    /// The host part.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, if one was given.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The port, or `default` when none was given.
    pub fn port_or_default(&self, default: u16) -> u16 {
        self.port.unwrap_or(default)
    }
}

fn parse_port(input: &str, port: &str) -> Result<u16, AddressError> {
    // u16::from_str also accepts a leading '+'.
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::invalid_host_and_port(
            input,
            format!("bad port '{}': not a decimal number", port),
        ));
    }
    port.parse::<u16>()
        .map_err(|e| AddressError::invalid_host_and_port(input, format!("bad port '{}': {}", port, e)))
}

impl FromStr for HostAndPort {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let (host, port) = if let Some(rest) = input.strip_prefix('[') {
            let (host, after) = rest
                .split_once(']')
                .ok_or_else(|| AddressError::invalid_host_and_port(input, "missing ']'"))?;
            let port = match after {
                "" => None,
                after => {
                    let port = after.strip_prefix(':').ok_or_else(|| {
                        AddressError::invalid_host_and_port(input, "expected ':' after ']'")
                    })?;
                    Some(parse_port(input, port)?)
                }
            };
            (host, port)
        } else {
            match input.split_once(':') {
                // More than one colon is a bare IPv6 literal without a port.
                Some((_, rest)) if rest.contains(':') => (input, None),
                Some((host, port)) => (host, Some(parse_port(input, port)?)),
                None => (input, None),
            }
        };

        if host.is_empty() {
            return Err(AddressError::invalid_host_and_port(input, "host is empty"));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl TryFrom<String> for HostAndPort {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HostAndPort> for String {
    fn from(value: HostAndPort) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HostAndPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_host(f, &self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

fn write_host(f: &mut fmt::Formatter<'_>, host: &str) -> fmt::Result {
    if host.contains(':') {
        write!(f, "[{}]", host)
    } else {
        f.write_str(host)
    }
}

/// An HTTP endpoint record: scheme, host and port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpHost {
    scheme: &'static str,
    host: String,
    port: u16,
}

impl HttpHost {
    /// Create an `http` endpoint.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: "http",
            host: host.into(),
            port,
        }
    }

    pub fn scheme(&self) -> &str {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Render the endpoint as a URL for the client library.
    pub fn to_url(&self) -> Result<Url, AddressError> {
        Url::parse(&self.to_string()).map_err(|e| AddressError::invalid_url(format!("{}: {}", self, e)))
    }
}

impl fmt::Display for HttpHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        write_host(f, &self.host)?;
        write!(f, ":{}", self.port)
    }
}

/// A raw transport address. Name resolution happens on demand through
/// [`ToSocketAddrs`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportAddress {
    host: String,
    port: u16,
}

impl TransportAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl ToSocketAddrs for TransportAddress {
    type Iter = std::vec::IntoIter<SocketAddr>;

    fn to_socket_addrs(&self) -> std::io::Result<Self::Iter> {
        (self.host.as_str(), self.port).to_socket_addrs()
    }
}

impl fmt::Display for TransportAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_host(f, &self.host)?;
        write!(f, ":{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_and_port() {
        let hp: HostAndPort = "127.0.0.1:9301".parse().unwrap();
        assert_eq!(hp.host(), "127.0.0.1");
        assert_eq!(hp.port(), Some(9301));
    }

    #[test]
    fn test_parse_host_without_port() {
        let hp: HostAndPort = "es.example.com".parse().unwrap();
        assert_eq!(hp.host(), "es.example.com");
        assert_eq!(hp.port(), None);
        assert_eq!(hp.port_or_default(9300), 9300);
    }

    #[test]
    fn test_parse_ipv6() {
        let bracketed: HostAndPort = "[::1]:9200".parse().unwrap();
        assert_eq!(bracketed.host(), "::1");
        assert_eq!(bracketed.port(), Some(9200));

        let bare: HostAndPort = "fe80::1".parse().unwrap();
        assert_eq!(bare.host(), "fe80::1");
        assert_eq!(bare.port(), None);

        assert_eq!(bracketed.to_string(), "[::1]:9200");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<HostAndPort>().is_err());
        assert!(":9300".parse::<HostAndPort>().is_err());
        assert!("host:".parse::<HostAndPort>().is_err());
        assert!("host:port".parse::<HostAndPort>().is_err());
        assert!("host:70000".parse::<HostAndPort>().is_err());
        assert!("host:+9300".parse::<HostAndPort>().is_err());
        assert!("host:-1".parse::<HostAndPort>().is_err());
        assert!("[::1]:+9300".parse::<HostAndPort>().is_err());
        assert!("[::1".parse::<HostAndPort>().is_err());
        assert!("[::1]9300".parse::<HostAndPort>().is_err());
        assert!(HostAndPort::from_host("").is_err());
    }

    #[test]
    fn test_http_host_to_url() {
        let url = HttpHost::new("127.0.0.1", 9300).to_url().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(9300));

        let v6 = HttpHost::new("::1", 9200).to_url().unwrap();
        assert_eq!(v6.host_str(), Some("[::1]"));
    }

    #[test]
    fn test_transport_address_resolves_literal() {
        let addr = TransportAddress::new("127.0.0.1", 9300);
        let resolved: Vec<SocketAddr> = addr.to_socket_addrs().unwrap().collect();
        assert_eq!(resolved, vec!["127.0.0.1:9300".parse::<SocketAddr>().unwrap()]);
    }
}
