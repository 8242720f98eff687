use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

use crate::modules::distribution::core::agent::Agent;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct AgentResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub assigned_entries: usize,
}

impl From<Agent> for AgentResponse {
    fn from(agent: Agent) -> Self {
        Self {
            assigned_entries: agent.assigned_entry_ids.len(),
            id: agent.id,
            name: agent.name,
            email: agent.email,
            phone: agent.phone,
        }
    }
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster.list_agents().await {
        Ok(agents) => Json(
            agents
                .into_iter()
                .map(AgentResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => {
            error!(error = %e, "listing agents failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
