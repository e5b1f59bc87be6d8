use async_trait::async_trait;
use std::net::IpAddr;
use v6ready_domain::{DnsQuery, DomainError};

/// Issues a single DNS query of one record type.
///
/// One shared instance is reused across every concurrent lookup of a
/// run; implementations hold no per-request mutable state and must
/// tolerate arbitrarily many outstanding requests. An empty answer set,
/// NXDOMAIN and transport failures all surface as `Err`; the caller
/// decides what a failed lookup means.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<IpAddr>, DomainError>;
}
