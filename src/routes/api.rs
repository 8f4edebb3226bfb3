use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{agents, calls, llms, phone_numbers, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router: one route per Retell operation
///
/// `/calls/phone` and `/calls/web` are static segments and take priority over
/// `/calls/{call_id}`.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Calls (no update/delete upstream)
        .route("/calls", get(calls::list_calls))
        .route("/calls/phone", post(calls::create_phone_call))
        .route("/calls/web", post(calls::create_web_call))
        .route("/calls/{call_id}", get(calls::get_call))
        // Agents
        .route(
            "/agents",
            get(agents::list_agents).post(agents::create_agent),
        )
        .route(
            "/agents/{agent_id}",
            get(agents::get_agent)
                .patch(agents::update_agent)
                .delete(agents::delete_agent),
        )
        // Phone numbers
        .route(
            "/phone-numbers",
            get(phone_numbers::list_phone_numbers).post(phone_numbers::create_phone_number),
        )
        .route(
            "/phone-numbers/{phone_number}",
            get(phone_numbers::get_phone_number)
                .patch(phone_numbers::update_phone_number)
                .delete(phone_numbers::delete_phone_number),
        )
        // Voices (read-only)
        .route("/voices", get(voices::list_voices))
        .route("/voices/{voice_id}", get(voices::get_voice))
        // Retell LLM configurations
        .route("/llms", get(llms::list_llms).post(llms::create_llm))
        .route(
            "/llms/{llm_id}",
            get(llms::get_llm)
                .patch(llms::update_llm)
                .delete(llms::delete_llm),
        )
        .layer(TraceLayer::new_for_http())
}
