// Ports describe what the distribution core needs from the persistence layer.
//
// Adapters implement these traits; the in memory adapter backs tests and local
// development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::distribution::core::agent::{Agent, AgentId};
use crate::modules::distribution::core::entry::{EntryDraft, EntryId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("agent not found: {0}")]
    AgentNotFound(AgentId),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AgentRoster: Send + Sync {
    /// Agents in registration order.
    async fn list_agents(&self) -> Result<Vec<Agent>, StoreError>;
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn create_entry(&self, draft: &EntryDraft, agent_id: &str)
    -> Result<EntryId, StoreError>;

    async fn append_to_backlog(&self, agent_id: &str, entry_id: &str) -> Result<(), StoreError>;

    /// Creates the entry and links it into the agent's backlog as one step.
    ///
    /// Stores without multi-record transactions keep this implementation: if
    /// the backlog append fails, the entry already exists without a backlog
    /// link. Stores that can write both records atomically override it.
    async fn assign_entry(
        &self,
        draft: &EntryDraft,
        agent_id: &str,
    ) -> Result<EntryId, StoreError> {
        let entry_id = self.create_entry(draft, agent_id).await?;
        self.append_to_backlog(agent_id, &entry_id).await?;
        Ok(entry_id)
    }
}
