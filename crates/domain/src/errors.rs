use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid host name: {0}")]
    InvalidHostName(String),

    #[error("DNS lookup failed: {0}")]
    DnsLookupFailed(String),

    #[error("DNS query timeout for {0}")]
    QueryTimeout(String),

    #[error("Category '{0}' has no registered entities")]
    EmptyCategory(String),

    #[error("Unknown country code: {0}")]
    UnknownCountry(String),

    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
