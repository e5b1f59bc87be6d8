use anyhow::Context;
use std::path::Path;
use v6ready_domain::Config;

pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load(config_path).with_context(|| match config_path {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to build default config".to_string(),
    })
}
