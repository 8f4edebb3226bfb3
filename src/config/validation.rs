use url::Url;

use crate::errors::config_error::{ConfigError, ConfigResult};

/// The upstream secret must be present and non-blank.
pub(crate) fn validate_api_key(api_key: &str) -> ConfigResult<()> {
    if api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    Ok(())
}

/// The base URL must be an absolute http(s) URL with a host, since operation
/// paths are appended to it as segments.
pub(crate) fn validate_base_url(base_url: &str) -> ConfigResult<()> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(base_url).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(&format!(
            "scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() || url.cannot_be_a_base() {
        return Err(invalid("URL must have a host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("URL must not carry a query or fragment"));
    }

    Ok(())
}

pub(crate) fn validate_rate_limit(requests_per_second: u32, burst_size: u32) -> ConfigResult<()> {
    if requests_per_second == 0 {
        return Err(ConfigError::InvalidValue {
            name: "RATE_LIMIT_REQUESTS_PER_SECOND",
            message: "must be greater than zero".to_string(),
        });
    }
    if burst_size == 0 {
        return Err(ConfigError::InvalidValue {
            name: "RATE_LIMIT_BURST_SIZE",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
