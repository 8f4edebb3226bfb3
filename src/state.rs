use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::upstream::{RetellClient, UpstreamApi, UpstreamError};

/// Shared, read-only application state handed to every handler
///
/// Holds no per-request data; the upstream client is the only dependency and
/// can be swapped for a test double through [`AppState::with_upstream`].
pub struct AppState {
    pub config: ServerConfig,
    pub upstream: Arc<dyn UpstreamApi>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build state with the reqwest-backed Retell client derived from `config`.
    pub fn new(config: ServerConfig) -> Result<Arc<Self>, UpstreamError> {
        let client = RetellClient::from_config(&config)?;
        tracing::info!(base_url = %config.retell_base_url, "Retell client initialized");
        Ok(Self::with_upstream(config, Arc::new(client)))
    }

    pub fn with_upstream(config: ServerConfig, upstream: Arc<dyn UpstreamApi>) -> Arc<Self> {
        Arc::new(Self { config, upstream })
    }
}
