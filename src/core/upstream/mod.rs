//! Upstream Retell API access
//!
//! Handlers never talk HTTP to Retell directly. They build an [`UpstreamRequest`]
//! and hand it to whatever [`UpstreamApi`] the application state carries: the
//! reqwest-backed [`RetellClient`] in production, or a test double.

mod client;
mod operation;

pub use client::RetellClient;
pub use operation::{Operation, OperationKind, Resource};

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// A single forwarded call, before it is turned into an HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub operation: Operation,
    /// Path identifier for retrieve/update/delete
    pub id: Option<String>,
    /// Raw inbound query string, forwarded byte-for-byte
    pub query: Option<String>,
    /// JSON body for create/update (and the call list filter)
    pub body: Option<Value>,
}

impl UpstreamRequest {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            id: None,
            query: None,
            body: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful upstream reply
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    /// Raw JSON text exactly as Retell sent it. `None` when the upstream sent
    /// no body (or the body was discarded for deletes).
    pub body: Option<Bytes>,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, TLS or timeout failure; no status was received
    #[error("Request to Retell API failed: {0}")]
    Transport(String),

    /// Retell answered with a non-2xx status
    #[error("Retell API returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// A 2xx response whose body is not valid JSON
    #[error("Malformed response from Retell API: {0}")]
    MalformedResponse(String),

    /// The request could not be turned into a valid upstream URL
    #[error("Invalid upstream request: {0}")]
    InvalidRequest(String),
}

impl UpstreamError {
    /// The upstream status, when one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable text for the `details` field of the error envelope
    pub fn details(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Something that can execute Retell operations.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    async fn execute(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}
