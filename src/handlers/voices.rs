//! Voice handlers. Voices are read-only upstream.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    response::Response,
};

use super::relay;
use crate::core::upstream::Operation;
use crate::errors::app_error::AppResult;
use crate::state::AppState;

/// Handler for GET /voices/{voice_id}
pub async fn get_voice(
    State(state): State<Arc<AppState>>,
    Path(voice_id): Path<String>,
) -> AppResult<Response> {
    relay::retrieve(&state, Operation::GetVoice, voice_id).await
}

/// Handler for GET /voices
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    relay::list(&state, Operation::ListVoices, query).await
}
