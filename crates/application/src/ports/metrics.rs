use v6ready_domain::RecordType;

/// Monotonic counters for lookup outcomes, one success/failure pair per
/// record type. Injected into the resolution call tree rather than held
/// as a process-wide singleton, so tests can substitute their own sink.
pub trait MetricsSink: Send + Sync {
    fn count_resolution_success(&self, record_type: RecordType);
    fn count_resolution_failure(&self, record_type: RecordType);
}
