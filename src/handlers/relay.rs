use axum::{
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::core::mapping;
use crate::core::upstream::{Operation, OperationKind, UpstreamRequest};
use crate::errors::app_error::AppResult;
use crate::state::AppState;

pub(crate) async fn create(state: &AppState, operation: Operation, raw_body: &[u8]) -> AppResult<Response> {
    let body = mapping::prepare_body(operation, raw_body)?;
    forward(state, UpstreamRequest::new(operation).with_body(body)).await
}

pub(crate) async fn retrieve(state: &AppState, operation: Operation, id: String) -> AppResult<Response> {
    forward(state, UpstreamRequest::new(operation).with_id(id)).await
}

/// List operations served by a GET upstream keep the query string on the URL;
/// those served by a POST (calls) receive the same parameters as a JSON body.
pub(crate) async fn list(
    state: &AppState,
    operation: Operation,
    query: Option<String>,
) -> AppResult<Response> {
    let request = UpstreamRequest::new(operation);
    let request = if operation.sends_body() {
        request.with_body(mapping::query_to_body(query.as_deref()))
    } else {
        request.with_query(query)
    };
    forward(state, request).await
}

pub(crate) async fn update(
    state: &AppState,
    operation: Operation,
    id: String,
    raw_body: &[u8],
) -> AppResult<Response> {
    let body = mapping::prepare_body(operation, raw_body)?;
    forward(state, UpstreamRequest::new(operation).with_id(id).with_body(body)).await
}

pub(crate) async fn delete(state: &AppState, operation: Operation, id: String) -> AppResult<Response> {
    forward(state, UpstreamRequest::new(operation).with_id(id)).await
}

/// Run one upstream call and relay its result.
///
/// Success keeps the upstream status and the body bytes as sent; deletes
/// always answer 204 with no body. Errors are rendered by `AppError`'s
/// `IntoResponse`.
async fn forward(state: &AppState, request: UpstreamRequest) -> AppResult<Response> {
    let operation = request.operation;
    let response = state.upstream.execute(request).await?;

    if operation.kind() == OperationKind::Delete {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(match response.body {
        Some(body) => (
            response.status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            body,
        )
            .into_response(),
        None => response.status.into_response(),
    })
}
