use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration. Every field has a serde default, so an
/// absent file or an empty TOML document both yield a working config.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dns.upstream_addr()?;
        Ok(())
    }
}
