use crate::category::Category;
use crate::entity::Entity;
use crate::report::EntityReport;
use std::collections::{BTreeMap, HashMap};

/// All categories observed for one country code. Categories are created
/// lazily on first registration and never removed.
#[derive(Debug, Clone)]
pub struct CountryData {
    pub country_code: String,
    pub categories: HashMap<String, Category>,
}

impl CountryData {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            categories: HashMap::new(),
        }
    }

    pub fn register(&mut self, entity: Entity) {
        self.categories
            .entry(entity.category.clone())
            .or_insert_with(|| Category::new(entity.category.clone()))
            .register(entity);
    }

    pub fn report(&self) -> BTreeMap<String, Vec<EntityReport>> {
        self.categories
            .iter()
            .map(|(name, category)| (name.clone(), category.report()))
            .collect()
    }
}
