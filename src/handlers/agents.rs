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

/// Handler for POST /agents
pub async fn create_agent(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    relay::create(&state, Operation::CreateAgent, &body).await
}

/// Handler for GET /agents/{agent_id}
pub async fn get_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> AppResult<Response> {
    relay::retrieve(&state, Operation::GetAgent, agent_id).await
}

/// Handler for GET /agents
pub async fn list_agents(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    relay::list(&state, Operation::ListAgents, query).await
}

/// Handler for PATCH /agents/{agent_id}
pub async fn update_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    relay::update(&state, Operation::UpdateAgent, agent_id, &body).await
}

/// Handler for DELETE /agents/{agent_id} - 204 on success
pub async fn delete_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> AppResult<Response> {
    relay::delete(&state, Operation::DeleteAgent, agent_id).await
}
