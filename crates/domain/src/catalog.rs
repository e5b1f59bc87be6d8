use serde::Deserialize;

/// One raw record of the input catalog.
///
/// `country`, `category` and `main_host` are required; deserialization
/// fails fast on records missing them. `name` falls back to the main
/// host name when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub country: String,
    pub category: String,
    pub main_host: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub additional_hosts: Vec<String>,
}
