use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// DNS resolution settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream server the readiness probes query, as "ip:port".
    #[serde(default = "default_upstream_server")]
    pub upstream_server: String,

    /// Per-query timeout in milliseconds. A query that overruns it is a
    /// lookup failure; there are no retries.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// How many entities may resolve at once. 0 disables the bound and
    /// starts every entity's resolution eagerly.
    #[serde(default = "default_max_concurrent_resolutions")]
    pub max_concurrent_resolutions: usize,
}

impl DnsConfig {
    pub fn upstream_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.upstream_server
            .parse()
            .map_err(|_| ConfigError::InvalidUpstreamServer(self.upstream_server.clone()))
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_server: default_upstream_server(),
            query_timeout_ms: default_query_timeout_ms(),
            max_concurrent_resolutions: default_max_concurrent_resolutions(),
        }
    }
}

fn default_upstream_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_max_concurrent_resolutions() -> usize {
    64
}
