#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use v6ready_application::ports::{CountryNames, DnsResolver, MetricsSink};
use v6ready_domain::{DnsQuery, DomainError, RecordType};

// ============================================================================
// Mock DnsResolver
// ============================================================================

/// Scripted resolver: answers come from a per-(domain, record type)
/// table; any unscripted query fails. Every query is appended to a log
/// so tests can assert ordering, and in-flight queries are counted so
/// tests can observe fan-out width.
#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), Vec<IpAddr>>>>,
    query_log: Arc<RwLock<Vec<(String, RecordType)>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each lookup holds its in-flight slot for `delay`, forcing
    /// overlap so concurrency can be observed.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub async fn set_response(&self, domain: &str, record_type: RecordType, addresses: &[&str]) {
        let parsed = addresses
            .iter()
            .map(|a| IpAddr::from_str(a).unwrap())
            .collect();
        self.responses
            .write()
            .await
            .insert((domain.to_string(), record_type), parsed);
    }

    /// Scripts a host that answers both A and AAAA with ordinary
    /// addresses.
    pub async fn set_dual_stack(&self, domain: &str) {
        self.set_response(domain, RecordType::A, &["192.0.2.10"])
            .await;
        self.set_response(domain, RecordType::AAAA, &["2001:db8::10"])
            .await;
    }

    /// Scripts a host that only answers the A query.
    pub async fn set_ipv4_only(&self, domain: &str) {
        self.set_response(domain, RecordType::A, &["192.0.2.20"])
            .await;
    }

    pub async fn queries(&self) -> Vec<(String, RecordType)> {
        self.query_log.read().await.clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<IpAddr>, DomainError> {
        self.query_log
            .write()
            .await
            .push((query.domain.to_string(), query.record_type));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = self
            .responses
            .read()
            .await
            .get(&(query.domain.to_string(), query.record_type))
            .cloned()
            .ok_or_else(|| {
                DomainError::DnsLookupFailed(format!(
                    "no mock response for {} {}",
                    query.domain, query.record_type
                ))
            });

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

// ============================================================================
// Mock MetricsSink
// ============================================================================

#[derive(Default)]
pub struct CountingMetrics {
    pub ipv4_successes: AtomicU64,
    pub ipv4_failures: AtomicU64,
    pub ipv6_successes: AtomicU64,
    pub ipv6_failures: AtomicU64,
}

impl CountingMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsSink for CountingMetrics {
    fn count_resolution_success(&self, record_type: RecordType) {
        match record_type {
            RecordType::A => self.ipv4_successes.fetch_add(1, Ordering::Relaxed),
            RecordType::AAAA => self.ipv6_successes.fetch_add(1, Ordering::Relaxed),
        };
    }

    fn count_resolution_failure(&self, record_type: RecordType) {
        match record_type {
            RecordType::A => self.ipv4_failures.fetch_add(1, Ordering::Relaxed),
            RecordType::AAAA => self.ipv6_failures.fetch_add(1, Ordering::Relaxed),
        };
    }
}

// ============================================================================
// Mock CountryNames
// ============================================================================

pub struct MockCountryNames {
    names: HashMap<String, String>,
}

impl MockCountryNames {
    pub fn with_names(names: &[(&str, &str)]) -> Self {
        Self {
            names: names
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl CountryNames for MockCountryNames {
    fn name(&self, country_code: &str) -> Result<String, DomainError> {
        self.names
            .get(country_code)
            .cloned()
            .ok_or_else(|| DomainError::UnknownCountry(country_code.to_string()))
    }
}
