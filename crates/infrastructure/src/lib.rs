//! v6ready infrastructure: the concrete adapters behind the application
//! ports: a UDP DNS resolver client, atomic metrics counters and the
//! ISO-3166 country-name registry.
pub mod country_names;
pub mod dns;
pub mod metrics;

pub use country_names::IsoCountryNames;
pub use dns::UdpResolver;
pub use metrics::{MetricsSnapshot, ResolutionCounters};
