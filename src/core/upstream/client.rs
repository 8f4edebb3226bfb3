use async_trait::async_trait;
use http::StatusCode;
use serde::de::IgnoredAny;
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use super::{OperationKind, UpstreamApi, UpstreamError, UpstreamRequest, UpstreamResponse};
use crate::config::ServerConfig;

/// reqwest-backed client for the Retell REST API
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct RetellClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Zeroizing<String>,
}

impl std::fmt::Debug for RetellClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetellClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl RetellClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| UpstreamError::InvalidRequest(format!("base URL '{base_url}': {e}")))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("retell-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            api_key: Zeroizing::new(api_key.into()),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, UpstreamError> {
        Self::new(&config.retell_base_url, config.retell_api_key.clone())
    }

    /// Full URL for a request: base URL + operation path + encoded identifier +
    /// the untouched inbound query string.
    pub fn endpoint_url(&self, request: &UpstreamRequest) -> Result<Url, UpstreamError> {
        let operation = request.operation;
        let mut url = self.base_url.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                UpstreamError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();
            segments.extend(operation.path().split('/').filter(|s| !s.is_empty()));

            if operation.takes_id() {
                let id = request
                    .id
                    .as_deref()
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| {
                        UpstreamError::InvalidRequest(format!("{operation} requires an identifier"))
                    })?;
                segments.push(id);
            }
        }

        url.set_query(request.query.as_deref().filter(|q| !q.is_empty()));
        Ok(url)
    }
}

#[async_trait]
impl UpstreamApi for RetellClient {
    async fn execute(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let operation = request.operation;
        let url = self.endpoint_url(&request)?;

        tracing::debug!(
            operation = %operation,
            resource = %operation.resource(),
            "Forwarding request to Retell"
        );

        let mut builder = self
            .http
            .request(operation.method(), url)
            .bearer_auth(self.api_key.as_str());

        if operation.sends_body() {
            let body = request.body.unwrap_or_else(|| Value::Object(Default::default()));
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(operation = %operation, error = %e, "Retell request failed");
            UpstreamError::Transport(e.to_string())
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status, &bytes);
            tracing::warn!(
                operation = %operation,
                status = %status,
                message = %message,
                "Retell returned an error"
            );
            return Err(UpstreamError::Status { status, message });
        }

        // Delete responses are reported as 204 locally whatever Retell sent back
        if operation.kind() == OperationKind::Delete || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(UpstreamResponse { status, body: None });
        }

        // Validate only; the original text is relayed untouched
        serde_json::from_slice::<IgnoredAny>(&bytes)
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        tracing::debug!(operation = %operation, status = %status, "Retell request succeeded");
        Ok(UpstreamResponse {
            status,
            body: Some(bytes),
        })
    }
}

/// Pull a readable message out of an error body.
///
/// Retell error bodies are JSON with a `message` field; anything else falls
/// back to the raw text, then to the status reason phrase.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error_message", "error", "detail"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = String::from_utf8_lossy(body).trim().to_string();
    if !text.is_empty() {
        return text;
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
