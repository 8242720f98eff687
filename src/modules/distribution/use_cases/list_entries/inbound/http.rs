use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle_all(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_entries().await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            error!(error = %e, "listing entries failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn handle_by_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.list_entries_by_agent(&agent_id).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            error!(agent_id = %agent_id, error = %e, "listing entries by agent failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
