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

/// Handler for POST /phone-numbers - purchases a number
pub async fn create_phone_number(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    relay::create(&state, Operation::CreatePhoneNumber, &body).await
}

/// Handler for GET /phone-numbers/{phone_number}
pub async fn get_phone_number(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> AppResult<Response> {
    relay::retrieve(&state, Operation::GetPhoneNumber, phone_number).await
}

/// Handler for GET /phone-numbers
pub async fn list_phone_numbers(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    relay::list(&state, Operation::ListPhoneNumbers, query).await
}

/// Handler for PATCH /phone-numbers/{phone_number}
pub async fn update_phone_number(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
    body: Bytes,
) -> AppResult<Response> {
    relay::update(&state, Operation::UpdatePhoneNumber, phone_number, &body).await
}

/// Handler for DELETE /phone-numbers/{phone_number} - releases the number, 204 on success
pub async fn delete_phone_number(
    State(state): State<Arc<AppState>>,
    Path(phone_number): Path<String>,
) -> AppResult<Response> {
    relay::delete(&state, Operation::DeletePhoneNumber, phone_number).await
}
