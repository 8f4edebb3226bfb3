use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::config_error::{ConfigError, ConfigResult};

/// Raw values read from the process environment (after `.env` has been loaded).
///
/// Every field is optional here; defaults are applied in `merge`.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls_cert_path: Option<String>,
    pub tls_key_path: Option<String>,
    pub retell_api_key: Option<String>,
    pub retell_base_url: Option<String>,
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
}

impl EnvConfig {
    pub fn load() -> ConfigResult<Self> {
        Ok(Self {
            host: var("HOST"),
            port: parse_var("PORT")?,
            tls_cert_path: var("TLS_CERT_PATH"),
            tls_key_path: var("TLS_KEY_PATH"),
            retell_api_key: var("RETELL_API_KEY"),
            retell_base_url: var("RETELL_BASE_URL"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
            rate_limit_requests_per_second: parse_var("RATE_LIMIT_REQUESTS_PER_SECOND")?,
            rate_limit_burst_size: parse_var("RATE_LIMIT_BURST_SIZE")?,
        })
    }
}

/// Blank values count as unset.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(name: &'static str) -> ConfigResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    var(name)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                name,
                message: format!("'{value}': {e}"),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_parse_var_port() {
        unsafe {
            env::set_var("PORT", "8081");
        }
        assert_eq!(parse_var::<u16>("PORT").unwrap(), Some(8081));

        unsafe {
            env::set_var("PORT", "eighty");
        }
        let err = parse_var::<u16>("PORT").unwrap_err();
        assert!(err.to_string().contains("PORT"));

        unsafe {
            env::remove_var("PORT");
        }
        assert_eq!(parse_var::<u16>("PORT").unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_blank_var_is_unset() {
        unsafe {
            env::set_var("RETELL_API_KEY", "   ");
        }
        assert_eq!(var("RETELL_API_KEY"), None);

        unsafe {
            env::set_var("RETELL_API_KEY", " key_123 ");
        }
        assert_eq!(var("RETELL_API_KEY").as_deref(), Some("key_123"));

        unsafe {
            env::remove_var("RETELL_API_KEY");
        }
    }
}
