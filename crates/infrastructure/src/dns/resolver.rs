use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::UdpTransport;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;
use v6ready_application::ports::DnsResolver;
use v6ready_domain::{ConfigError, DnsConfig, DnsQuery, DomainError};

/// DNS resolver client speaking plain UDP to one upstream server.
///
/// Stateless per request: every lookup builds its own wire message and
/// socket, so one shared instance serves any number of concurrent
/// lookups without locking. One attempt per query: no retries, no
/// caching, no fallback transport.
pub struct UdpResolver {
    transport: UdpTransport,
    timeout: Duration,
}

impl UdpResolver {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server_addr),
            timeout,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.upstream_addr()?,
            Duration::from_millis(config.query_timeout_ms),
        ))
    }
}

#[async_trait]
impl DnsResolver for UdpResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<IpAddr>, DomainError> {
        let query_bytes = MessageBuilder::build_query(&query.domain, query.record_type)?;
        let response_bytes = self.transport.send(&query_bytes, self.timeout).await?;
        let response = ResponseParser::parse(&response_bytes, query.record_type)?;

        // NXDOMAIN, NODATA and server failures are all the same thing
        // to a readiness probe: no usable record of this type.
        if !response.addresses.is_empty() {
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                addresses = response.addresses.len(),
                "Lookup answered"
            );
            return Ok(response.addresses);
        }

        Err(DomainError::DnsLookupFailed(format!(
            "{} {}: {}",
            query.domain,
            query.record_type,
            ResponseParser::rcode_to_status(response.rcode)
        )))
    }
}
