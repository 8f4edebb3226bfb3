//! Call handlers
//!
//! Retell does not support updating or deleting calls, so neither is exposed.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    response::Response,
};

use super::relay;
use crate::core::upstream::Operation;
use crate::errors::app_error::AppResult;
use crate::state::AppState;

/// Handler for POST /calls/phone
///
/// Accepts either `{from, to, agent_id}` or Retell's own
/// `{from_number, to_number, agent_id}`; the short names are renamed before
/// forwarding.
pub async fn create_phone_call(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    relay::create(&state, Operation::CreatePhoneCall, &body).await
}

/// Handler for POST /calls/web
pub async fn create_web_call(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    relay::create(&state, Operation::CreateWebCall, &body).await
}

/// Handler for GET /calls/{call_id}
pub async fn get_call(
    State(state): State<Arc<AppState>>,
    Path(call_id): Path<String>,
) -> AppResult<Response> {
    relay::retrieve(&state, Operation::GetCall, call_id).await
}

/// Handler for GET /calls
pub async fn list_calls(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    relay::list(&state, Operation::ListCalls, query).await
}
