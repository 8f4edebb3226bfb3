use std::path::PathBuf;

use super::env::EnvConfig;
use super::yaml::YamlConfig;
use super::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND, DEFAULT_RETELL_BASE_URL, ServerConfig, TlsConfig,
};
use crate::errors::config_error::{ConfigError, ConfigResult};

/// Build the final configuration: YAML values win over environment values,
/// which win over defaults.
pub(crate) fn merge_config(env: EnvConfig, yaml: Option<YamlConfig>) -> ConfigResult<ServerConfig> {
    let yaml = yaml.unwrap_or_default();
    let server = yaml.server.unwrap_or_default();
    let retell = yaml.retell.unwrap_or_default();
    let security = yaml.security.unwrap_or_default();

    let tls = resolve_tls(
        server.tls.as_ref().and_then(|tls| tls.enabled),
        server
            .tls
            .as_ref()
            .and_then(|tls| tls.cert_path.clone())
            .or(env.tls_cert_path),
        server
            .tls
            .as_ref()
            .and_then(|tls| tls.key_path.clone())
            .or(env.tls_key_path),
    )?;

    let retell_api_key = retell
        .api_key
        .or(env.retell_api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    Ok(ServerConfig {
        host: server
            .host
            .or(env.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: server.port.or(env.port).unwrap_or(DEFAULT_PORT),
        tls,
        retell_api_key,
        retell_base_url: retell
            .base_url
            .or(env.retell_base_url)
            .unwrap_or_else(|| DEFAULT_RETELL_BASE_URL.to_string()),
        cors_allowed_origins: security.cors_allowed_origins.or(env.cors_allowed_origins),
        rate_limit_requests_per_second: security
            .rate_limit_requests_per_second
            .or(env.rate_limit_requests_per_second)
            .unwrap_or(DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND),
        rate_limit_burst_size: security
            .rate_limit_burst_size
            .or(env.rate_limit_burst_size)
            .unwrap_or(DEFAULT_RATE_LIMIT_BURST_SIZE),
    })
}

/// TLS is on when explicitly enabled, or when any path is given without an
/// explicit `enabled: false`. Enabled TLS needs both paths.
fn resolve_tls(
    enabled: Option<bool>,
    cert_path: Option<String>,
    key_path: Option<String>,
) -> ConfigResult<Option<TlsConfig>> {
    let enabled = enabled.unwrap_or(cert_path.is_some() || key_path.is_some());
    if !enabled {
        return Ok(None);
    }

    match (cert_path, key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some(TlsConfig {
            cert_path: PathBuf::from(cert_path),
            key_path: PathBuf::from(key_path),
        })),
        _ => Err(ConfigError::IncompleteTls),
    }
}
