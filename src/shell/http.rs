use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::modules::distribution::use_cases::list_agents::inbound::http as agents_http;
use crate::modules::distribution::use_cases::list_entries::inbound::http as entries_http;
use crate::modules::distribution::use_cases::upload_entries::inbound::http as upload_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route(
            "/upload",
            post(upload_http::handle).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/entries", get(entries_http::handle_all))
        .route("/entries/agent/{agent_id}", get(entries_http::handle_by_agent))
        .route("/agents", get(agents_http::handle))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
