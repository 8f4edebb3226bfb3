use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup configuration failures. Any of these stops the server before it binds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RETELL_API_KEY must be set (environment, .env file or retell.api_key in YAML)")]
    MissingApiKey,

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },

    #[error("Invalid Retell base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("TLS requires both a certificate path and a key path")]
    IncompleteTls,

    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
}
