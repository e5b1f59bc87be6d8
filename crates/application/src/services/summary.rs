use crate::ports::CountryNames;
use std::sync::Arc;
use v6ready_domain::{Category, CountryData, DomainError, Source};

/// Reserved country code used by validation catalogs. It maps to a
/// fixed display name instead of a registry lookup.
const VALIDATION_COUNTRY_CODE: &str = "xx";
const VALIDATION_COUNTRY_NAME: &str = "Validation Test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub ready_count: usize,
    pub total_count: usize,
    pub ready_percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
    pub categories: Vec<CategorySummary>,
}

/// Rolls an already-resolved tree up into per-category readiness ratios
/// and per-country display names.
pub struct SummaryService {
    names: Arc<dyn CountryNames>,
}

impl SummaryService {
    pub fn new(names: Arc<dyn CountryNames>) -> Self {
        Self { names }
    }

    pub fn country_name(&self, country_code: &str) -> Result<String, DomainError> {
        if country_code == VALIDATION_COUNTRY_CODE {
            return Ok(VALIDATION_COUNTRY_NAME.to_string());
        }

        self.names.name(country_code)
    }

    pub fn summarize_country(&self, country: &CountryData) -> Result<CountrySummary, DomainError> {
        let mut categories = country
            .categories
            .values()
            .map(summarize_category)
            .collect::<Result<Vec<_>, _>>()?;
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(CountrySummary {
            code: country.country_code.clone(),
            name: self.country_name(&country.country_code)?,
            categories,
        })
    }

    /// Sorted by country code; fails on the first empty category or
    /// unknown country code instead of emitting a partial rollup.
    pub fn summarize(&self, source: &Source) -> Result<Vec<CountrySummary>, DomainError> {
        let mut countries = source
            .countries
            .values()
            .map(|country| self.summarize_country(country))
            .collect::<Result<Vec<_>, _>>()?;
        countries.sort_by(|a, b| a.code.cmp(&b.code));

        Ok(countries)
    }
}

fn summarize_category(category: &Category) -> Result<CategorySummary, DomainError> {
    Ok(CategorySummary {
        name: category.name.clone(),
        ready_count: category.ready_count(),
        total_count: category.total_count(),
        ready_percentage: category.ready_percentage()?,
    })
}
