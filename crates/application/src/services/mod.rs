pub mod resolution;
pub mod summary;

pub use resolution::ResolutionService;
pub use summary::{CategorySummary, CountrySummary, SummaryService};
