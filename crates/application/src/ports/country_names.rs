use v6ready_domain::DomainError;

/// Human-readable country names keyed by ISO-3166 alpha-2 code.
pub trait CountryNames: Send + Sync {
    /// Fails with `DomainError::UnknownCountry` for unrecognized codes.
    fn name(&self, country_code: &str) -> Result<String, DomainError>;
}
