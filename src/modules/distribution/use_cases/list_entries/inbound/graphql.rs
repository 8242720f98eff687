use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::distribution::core::agent::AgentSummary;
use crate::modules::distribution::use_cases::list_entries::projection::EntryView;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAgent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<AgentSummary> for GqlAgent {
    fn from(agent: AgentSummary) -> Self {
        Self {
            id: agent.id,
            name: agent.name,
            email: agent.email,
            phone: agent.phone,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEntry {
    pub id: String,
    pub first_name: String,
    pub phone: String,
    pub notes: String,
    pub status: String,
    pub assigned_agent: Option<GqlAgent>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<EntryView> for GqlEntry {
    fn from(v: EntryView) -> Self {
        Self {
            id: v.id,
            first_name: v.first_name,
            phone: v.phone,
            notes: v.notes,
            status: v.status.as_str().to_string(),
            assigned_agent: v.assigned_agent.map(Into::into),
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_entries().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn entries_by_agent(
        &self,
        context: &Context<'_>,
        agent_id: String,
    ) -> GqlResult<Vec<GqlEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_entries_by_agent(&agent_id).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
