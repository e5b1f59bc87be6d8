pub mod country_names;
pub mod dns_resolver;
pub mod metrics;

pub use country_names::CountryNames;
pub use dns_resolver::DnsResolver;
pub use metrics::MetricsSink;
