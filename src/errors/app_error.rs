use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::upstream::UpstreamError;

/// Fixed `error` text used for every failure that originated upstream.
pub const UPSTREAM_ERROR_MESSAGE: &str = "An error occurred with the Retell API.";

/// Fixed `error` text used when the inbound body cannot be forwarded.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body.";

pub type AppResult<T> = Result<T, AppError>;

/// Errors a route handler can end with
#[derive(Debug, Error)]
pub enum AppError {
    /// The forwarded call failed (network, non-2xx, malformed response)
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The inbound body is not a JSON object; nothing was sent upstream
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// JSON body returned on every failed request
///
/// ```json
/// { "error": "An error occurred with the Retell API.", "details": "Agent not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Local status code for this error.
    ///
    /// Upstream failures keep the upstream's status when one was received;
    /// transport and decoding failures have none and fall back to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Upstream(err) => err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            AppError::Upstream(err) => ErrorEnvelope {
                error: UPSTREAM_ERROR_MESSAGE.to_string(),
                details: Some(err.details()),
            },
            AppError::InvalidBody(reason) => ErrorEnvelope {
                error: INVALID_BODY_MESSAGE.to_string(),
                details: Some(reason.clone()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request failed");
        }

        (status, Json(self.envelope())).into_response()
    }
}
