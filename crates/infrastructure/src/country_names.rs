use isocountry::CountryCode;
use v6ready_application::ports::CountryNames;
use v6ready_domain::DomainError;

/// ISO-3166 registry lookup. Catalog files carry lowercase alpha-2
/// codes; the registry wants them uppercase.
pub struct IsoCountryNames;

impl CountryNames for IsoCountryNames {
    fn name(&self, country_code: &str) -> Result<String, DomainError> {
        CountryCode::for_alpha2(&country_code.to_ascii_uppercase())
            .map(|country| country.name().to_string())
            .map_err(|_| DomainError::UnknownCountry(country_code.to_string()))
    }
}
