use crate::catalog::CatalogRecord;
use crate::host::Host;
use crate::report::EntityReport;

/// A named organization whose IPv6 readiness is being assessed.
///
/// Owns one main host and zero or more additional hosts. `ipv6_ready`
/// stays `None` until every owned host has been resolved and the verdict
/// is derived; it is computed exactly once per resolution run.
#[derive(Debug, Clone)]
pub struct Entity {
    pub country: String,
    pub category: String,
    pub name: String,
    pub main_host: Host,
    pub additional_hosts: Vec<Host>,
    pub ipv6_ready: Option<bool>,
}

impl Entity {
    pub fn from_record(record: CatalogRecord) -> Self {
        let main_host = Host::new(record.main_host);
        let name = record
            .name
            .unwrap_or_else(|| main_host.name.to_string());

        Self {
            country: record.country,
            category: record.category,
            name,
            main_host,
            additional_hosts: record
                .additional_hosts
                .into_iter()
                .map(Host::new)
                .collect(),
            ipv6_ready: None,
        }
    }

    /// Conjunction over every owned host's IPv6 flag. A flag that is
    /// still unknown counts as not ready; the `None` is never silently
    /// carried into the verdict. An entity with no additional hosts is
    /// ready iff its main host is (empty conjunction is true).
    pub fn compute_readiness(&mut self) {
        let ready = self.main_host.has_ipv6_address == Some(true)
            && self
                .additional_hosts
                .iter()
                .all(|host| host.has_ipv6_address == Some(true));

        self.ipv6_ready = Some(ready);
    }

    pub fn report(&self) -> EntityReport {
        EntityReport {
            name: self.name.clone(),
            main_host: self.main_host.report(),
            additional_hosts: self.additional_hosts.iter().map(Host::report).collect(),
        }
    }
}
