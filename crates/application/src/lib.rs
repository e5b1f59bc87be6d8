//! v6ready application layer: the ports the engine consumes and the
//! services that drive resolution and summarize the results.
pub mod ports;
pub mod services;

pub use ports::{CountryNames, DnsResolver, MetricsSink};
pub use services::{CategorySummary, CountrySummary, ResolutionService, SummaryService};
