use crate::catalog::CatalogRecord;
use crate::country::CountryData;
use crate::entity::Entity;
use crate::report::SourceReport;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Root of the country → category → entity tree. One instance per run.
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub countries: HashMap<String, CountryData>,
    pub last_resolved: Option<DateTime<Utc>>,
}

impl Source {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every record into the tree, creating country and
    /// category nodes on first use. Safe to call repeatedly; later
    /// catalogs extend existing nodes rather than replacing them.
    pub fn extend_from_records(&mut self, records: impl IntoIterator<Item = CatalogRecord>) {
        for record in records {
            let entity = Entity::from_record(record);
            self.countries
                .entry(entity.country.clone())
                .or_insert_with(|| CountryData::new(entity.country.clone()))
                .register(entity);
        }
    }

    pub fn entity_count(&self) -> usize {
        self.countries
            .values()
            .flat_map(|country| country.categories.values())
            .map(|category| category.total_count())
            .sum()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.countries
            .values()
            .flat_map(|country| country.categories.values())
            .flat_map(|category| category.entities.iter())
    }

    /// Flattened mutable walk of the tree. Each entity is yielded once,
    /// so concurrent per-entity resolution futures borrow disjoint data.
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.countries
            .values_mut()
            .flat_map(|country| country.categories.values_mut())
            .flat_map(|category| category.entities.iter_mut())
    }

    pub fn report(&self) -> SourceReport {
        SourceReport {
            countries: self
                .countries
                .iter()
                .map(|(code, country)| (code.clone(), country.report()))
                .collect(),
            last_resolved: self.last_resolved,
        }
    }
}
