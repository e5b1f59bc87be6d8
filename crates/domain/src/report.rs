use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Serialized shape of one probed host. The tri-state flags serialize
/// as boolean-or-null; null means the host was never resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HostReport {
    pub name: String,
    pub has_ipv4_address: Option<bool>,
    pub has_ipv6_address: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EntityReport {
    pub name: String,
    pub main_host: HostReport,
    pub additional_hosts: Vec<HostReport>,
}

/// Full nested report: country code → category → entities, plus the
/// completion timestamp of the resolution run (null until `resolve_all`
/// finishes). Mappings use `BTreeMap` so serialized output is
/// deterministic; entity order within a category is registration order.
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub countries: BTreeMap<String, BTreeMap<String, Vec<EntityReport>>>,
    pub last_resolved: Option<DateTime<Utc>>,
}
