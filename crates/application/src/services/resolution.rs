use crate::ports::{DnsResolver, MetricsSink};
use chrono::Utc;
use futures::future::join_all;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use v6ready_domain::{DnsQuery, Entity, Host, RecordType, Source};

/// Drives DNS resolution over the country → category → entity tree.
///
/// Lookup failures are absorbed where they happen: a failed query
/// becomes a negative flag plus a metrics count, never an error to the
/// caller and never a retry. Concurrency is cooperative only, with no task
/// spawning; every in-flight future borrows exactly one entity.
pub struct ResolutionService {
    resolver: Arc<dyn DnsResolver>,
    metrics: Arc<dyn MetricsSink>,
    limit: Option<Arc<Semaphore>>,
}

impl ResolutionService {
    /// Unbounded fan-out: every entity's resolution starts eagerly.
    pub fn new(resolver: Arc<dyn DnsResolver>, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            resolver,
            metrics,
            limit: None,
        }
    }

    /// At most `max_concurrent` entities resolve at once; `0` means
    /// unbounded. The bound changes scheduling only; per-entity results
    /// and the all-or-nothing completion of [`resolve_all`] are
    /// identical either way.
    ///
    /// [`resolve_all`]: ResolutionService::resolve_all
    pub fn with_concurrency_limit(
        resolver: Arc<dyn DnsResolver>,
        metrics: Arc<dyn MetricsSink>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            resolver,
            metrics,
            limit: (max_concurrent > 0).then(|| Arc::new(Semaphore::new(max_concurrent))),
        }
    }

    /// Sets both of the host's flags, exactly once, and never fails.
    ///
    /// The A and AAAA probes are isolated steps: the outcome of one
    /// never affects the other, and both complete before this returns.
    pub async fn resolve_host(&self, host: &mut Host) {
        let query = DnsQuery::new(Arc::clone(&host.name), RecordType::A);
        match self.resolver.resolve(&query).await {
            Ok(_) => {
                host.has_ipv4_address = Some(true);
                self.metrics.count_resolution_success(RecordType::A);
            }
            Err(error) => {
                warn!(host = %host.name, %error, "IPv4 record lookup failed");
                host.has_ipv4_address = Some(false);
                self.metrics.count_resolution_failure(RecordType::A);
            }
        }

        let query = DnsQuery::new(Arc::clone(&host.name), RecordType::AAAA);
        match self.resolver.resolve(&query).await {
            Ok(addresses) => {
                self.metrics.count_resolution_success(RecordType::AAAA);
                let genuine = addresses.iter().any(is_genuine_ipv6);
                debug!(
                    host = %host.name,
                    answers = addresses.len(),
                    genuine,
                    "AAAA lookup answered"
                );
                host.has_ipv6_address = Some(genuine);
            }
            Err(error) => {
                debug!(host = %host.name, %error, "IPv6 record lookup failed");
                host.has_ipv6_address = Some(false);
                self.metrics.count_resolution_failure(RecordType::AAAA);
            }
        }
    }

    /// Main host strictly first, then every additional host concurrently
    /// behind one join barrier, then the readiness verdict.
    pub async fn resolve_entity(&self, entity: &mut Entity) {
        self.resolve_host(&mut entity.main_host).await;

        join_all(
            entity
                .additional_hosts
                .iter_mut()
                .map(|host| self.resolve_host(host)),
        )
        .await;

        entity.compute_readiness();
        debug!(entity = %entity.name, ready = ?entity.ipv6_ready, "Entity resolved");
    }

    /// Resolves the whole tree behind a single global barrier and stamps
    /// `last_resolved` once every entity has finished.
    pub async fn resolve_all(&self, source: &mut Source) {
        let total = source.entity_count();
        info!(entities = total, "Starting catalog resolution");

        let mut in_flight: FuturesUnordered<_> = source
            .entities_mut()
            .map(|entity| self.resolve_entity_gated(entity))
            .collect();

        while in_flight.next().await.is_some() {}
        drop(in_flight);

        source.last_resolved = Some(Utc::now());
        info!(entities = total, "Catalog resolution finished");
    }

    async fn resolve_entity_gated(&self, entity: &mut Entity) {
        // acquire() only fails once the semaphore is closed, which never
        // happens here; an unbounded service skips the gate entirely.
        let _permit = match self.limit.as_deref() {
            Some(semaphore) => semaphore.acquire().await.ok(),
            None => None,
        };

        self.resolve_entity(entity).await;
    }
}

/// Genuine IPv6: an IPv6 address that is not IPv4-mapped (the `::ffff:`
/// form). A mapped address means IPv4 connectivity tunneled through an
/// IPv6-capable resolver, so it never counts toward readiness; neither
/// does a stray IPv4 answer.
fn is_genuine_ipv6(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().is_none(),
        IpAddr::V4(_) => false,
    }
}
