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

pub async fn create_llm(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<Response> {
    relay::create(&state, Operation::CreateLlm, &body).await
}

pub async fn get_llm(
    State(state): State<Arc<AppState>>,
    Path(llm_id): Path<String>,
) -> AppResult<Response> {
    relay::retrieve(&state, Operation::GetLlm, llm_id).await
}

pub async fn list_llms(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    relay::list(&state, Operation::ListLlms, query).await
}

pub async fn update_llm(
    State(state): State<Arc<AppState>>,
    Path(llm_id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    relay::update(&state, Operation::UpdateLlm, llm_id, &body).await
}

/// 204 on success
pub async fn delete_llm(
    State(state): State<Arc<AppState>>,
    Path(llm_id): Path<String>,
) -> AppResult<Response> {
    relay::delete(&state, Operation::DeleteLlm, llm_id).await
}
