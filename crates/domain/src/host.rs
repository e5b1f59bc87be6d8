use crate::report::HostReport;
use std::sync::Arc;

/// One DNS name whose A/AAAA presence is being checked.
///
/// Both flags are tri-state: `None` means the host was never resolved,
/// which is distinct from `Some(false)` (resolved, record absent). The
/// resolution service sets both exactly once; the flags are never
/// recomputed afterwards.
#[derive(Debug, Clone)]
pub struct Host {
    pub name: Arc<str>,
    pub has_ipv4_address: Option<bool>,
    pub has_ipv6_address: Option<bool>,
}

impl Host {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            has_ipv4_address: None,
            has_ipv6_address: None,
        }
    }

    /// True once a resolution pass has assigned both flags.
    pub fn is_resolved(&self) -> bool {
        self.has_ipv4_address.is_some() && self.has_ipv6_address.is_some()
    }

    pub fn report(&self) -> HostReport {
        HostReport {
            name: self.name.to_string(),
            has_ipv4_address: self.has_ipv4_address,
            has_ipv6_address: self.has_ipv6_address,
        }
    }
}
