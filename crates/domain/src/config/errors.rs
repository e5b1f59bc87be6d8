use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {detail}")]
    Read { path: String, detail: String },

    #[error("Failed to parse config file '{path}': {detail}")]
    Parse { path: String, detail: String },

    #[error("Invalid upstream server address '{0}'")]
    InvalidUpstreamServer(String),
}
