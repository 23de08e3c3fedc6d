//! Conversion from configured host-and-port descriptors to the address
//! records the Elasticsearch client consumes.
//!
//! Descriptors without a port get [`DEFAULT_PORT`].

use crate::types::{HostAndPort, HttpHost, TransportAddress};

/// Port used when a descriptor does not name one.
pub const DEFAULT_PORT: u16 = 9300;

/// Convert a descriptor to an HTTP endpoint.
pub fn http_host_from_host_and_port(host_and_port: &HostAndPort) -> HttpHost {
    HttpHost::new(
        host_and_port.host(),
        host_and_port.port_or_default(DEFAULT_PORT),
    )
}

/// Convert descriptors to HTTP endpoints, preserving order.
///
/// `None` yields an empty vector.
pub fn http_hosts_from_host_and_ports(host_and_ports: Option<&[HostAndPort]>) -> Vec<HttpHost> {
    host_and_ports
        .unwrap_or_default()
        .iter()
        .map(http_host_from_host_and_port)
        .collect()
}

/// Convert a descriptor to a transport address.
pub fn transport_address_from_host_and_port(host_and_port: &HostAndPort) -> TransportAddress {
    TransportAddress::new(
        host_and_port.host(),
        host_and_port.port_or_default(DEFAULT_PORT),
    )
}

/// Convert descriptors to transport addresses, preserving order.
///
/// `None` yields an empty vector.
pub fn transport_addresses_from_host_and_ports(
    host_and_ports: Option<&[HostAndPort]>,
) -> Vec<TransportAddress> {
    host_and_ports
        .unwrap_or_default()
        .iter()
        .map(transport_address_from_host_and_port)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servers() -> Vec<HostAndPort> {
        vec![
            HostAndPort::from_parts("127.0.0.1", 9300).unwrap(),
            HostAndPort::from_host("es-2.internal").unwrap(),
            HostAndPort::from_parts("::1", 9302).unwrap(),
        ]
    }

    #[test]
    fn test_http_host_default_port() {
        let host = http_host_from_host_and_port(&HostAndPort::from_host("localhost").unwrap());
        assert_eq!(host.scheme(), "http");
        assert_eq!(host.host(), "localhost");
        assert_eq!(host.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_http_hosts_preserve_order() {
        let servers = servers();
        let hosts = http_hosts_from_host_and_ports(Some(&servers));

        assert_eq!(hosts.len(), servers.len());
        for (host, server) in hosts.iter().zip(&servers) {
            assert_eq!(*host, http_host_from_host_and_port(server));
        }
        assert_eq!(hosts[1].port(), 9300);
        assert_eq!(hosts[2].to_string(), "http://[::1]:9302");
    }

    #[test]
    fn test_none_yields_empty() {
        assert!(http_hosts_from_host_and_ports(None).is_empty());
        assert!(transport_addresses_from_host_and_ports(None).is_empty());
        assert!(http_hosts_from_host_and_ports(Some(&[])).is_empty());
    }

    #[test]
    fn test_transport_addresses() {
        let servers = servers();
        let addresses = transport_addresses_from_host_and_ports(Some(&servers));

        assert_eq!(
            addresses,
            vec![
                TransportAddress::new("127.0.0.1", 9300),
                TransportAddress::new("es-2.internal", 9300),
                TransportAddress::new("::1", 9302),
            ]
        );
    }
}
