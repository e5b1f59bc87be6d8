use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use v6ready_application::ports::MetricsSink;
use v6ready_domain::RecordType;

/// Monotonic counters for resolution outcomes.
///
/// Atomic operations only; one shared instance is written by every
/// concurrent lookup of a run.
#[derive(Debug, Default)]
pub struct ResolutionCounters {
    ipv4_successes: AtomicU64,
    ipv4_failures: AtomicU64,
    ipv6_successes: AtomicU64,
    ipv6_failures: AtomicU64,
}

/// Point-in-time readout of [`ResolutionCounters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub ipv4_successes: u64,
    pub ipv4_failures: u64,
    pub ipv6_successes: u64,
    pub ipv6_failures: u64,
}

impl ResolutionCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            ipv4_successes: self.ipv4_successes.load(Ordering::Relaxed),
            ipv4_failures: self.ipv4_failures.load(Ordering::Relaxed),
            ipv6_successes: self.ipv6_successes.load(Ordering::Relaxed),
            ipv6_failures: self.ipv6_failures.load(Ordering::Relaxed),
        }
    }
}

impl MetricsSink for ResolutionCounters {
    fn count_resolution_success(&self, record_type: RecordType) {
        match record_type {
            RecordType::A => &self.ipv4_successes,
            RecordType::AAAA => &self.ipv6_successes,
        }
        .fetch_add(1, Ordering::Relaxed);
    }

    fn count_resolution_failure(&self, record_type: RecordType) {
        match record_type {
            RecordType::A => &self.ipv4_failures,
            RecordType::AAAA => &self.ipv6_failures,
        }
        .fetch_add(1, Ordering::Relaxed);
    }
}
