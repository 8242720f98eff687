// In memory agent roster, entry store and entry read model.
//
// Purpose
// - Run the distribution pipeline and its queries without a database.
//
// Responsibilities
// - Keep agents in registration order and entries in creation order.
// - Create an entry and link it into its agent's backlog under one write lock.
// - Offer failure injection so tests can cut a batch short.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::modules::distribution::core::agent::{Agent, NewAgent};
use crate::modules::distribution::core::entry::{Entry, EntryDraft, EntryId};
use crate::modules::distribution::core::ports::{AgentRoster, EntryStore, StoreError};
use crate::modules::distribution::use_cases::list_entries::projection::{
    EntryView, newest_first,
};
use crate::modules::distribution::use_cases::list_entries::queries_port::EntryQueries;

#[derive(Debug, Default)]
struct StoreState {
    agents: Vec<Agent>,
    entries: Vec<Entry>,
}

impl StoreState {
    fn agent_mut(&mut self, agent_id: &str) -> Result<&mut Agent, StoreError> {
        self.agents
            .iter_mut()
            .find(|agent| agent.id == agent_id)
            .ok_or_else(|| StoreError::AgentNotFound(agent_id.to_string()))
    }

    fn views<'a>(&'a self, entries: impl IntoIterator<Item = &'a Entry>) -> Vec<EntryView> {
        newest_first(entries)
            .into_iter()
            .map(|entry| {
                let agent = self
                    .agents
                    .iter()
                    .find(|agent| agent.id == entry.assigned_agent_id)
                    .map(Agent::summary);
                EntryView::join(entry, agent)
            })
            .collect()
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
    entry_write_budget: Mutex<Option<usize>>,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Lets `remaining` more entries through, then fails every entry write.
    pub async fn fail_entry_writes_after(&self, remaining: usize) {
        *self.entry_write_budget.lock().await = Some(remaining);
    }

    pub async fn register_agent(&self, agent: NewAgent) -> Agent {
        let agent = Agent {
            id: Uuid::now_v7().to_string(),
            name: agent.name,
            email: agent.email,
            phone: agent.phone,
            assigned_entry_ids: Vec::new(),
        };
        self.insert_agent(agent.clone()).await;
        agent
    }

    pub async fn insert_agent(&self, agent: Agent) {
        self.state.write().await.agents.push(agent);
    }

    pub async fn entry(&self, entry_id: &str) -> Option<Entry> {
        self.state
            .read()
            .await
            .entries
            .iter()
            .find(|entry| entry.id == entry_id)
            .cloned()
    }

    pub async fn entry_count(&self) -> usize {
        self.state.read().await.entries.len()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("entry store offline".into()));
        }
        Ok(())
    }

    async fn take_entry_write(&self) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut budget = self.entry_write_budget.lock().await;
        match budget.as_mut() {
            Some(0) => Err(StoreError::Backend("entry store offline".into())),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AgentRoster for InMemoryStore {
    async fn list_agents(&self) -> Result<Vec<Agent>, StoreError> {
        self.ensure_online()?;
        Ok(self.state.read().await.agents.clone())
    }
}

#[async_trait]
impl EntryStore for InMemoryStore {
    async fn create_entry(
        &self,
        draft: &EntryDraft,
        agent_id: &str,
    ) -> Result<EntryId, StoreError> {
        self.take_entry_write().await?;
        let mut state = self.state.write().await;
        state.agent_mut(agent_id)?;
        let entry = Entry::assign(
            Uuid::now_v7().to_string(),
            draft,
            agent_id,
            Utc::now().timestamp_millis(),
        );
        let entry_id = entry.id.clone();
        state.entries.push(entry);
        Ok(entry_id)
    }

    async fn append_to_backlog(&self, agent_id: &str, entry_id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut state = self.state.write().await;
        state
            .agent_mut(agent_id)?
            .assigned_entry_ids
            .push(entry_id.to_string());
        Ok(())
    }

    async fn assign_entry(
        &self,
        draft: &EntryDraft,
        agent_id: &str,
    ) -> Result<EntryId, StoreError> {
        self.take_entry_write().await?;
        let mut state = self.state.write().await;
        let entry_id = Uuid::now_v7().to_string();
        state
            .agent_mut(agent_id)?
            .assigned_entry_ids
            .push(entry_id.clone());
        state.entries.push(Entry::assign(
            entry_id.clone(),
            draft,
            agent_id,
            Utc::now().timestamp_millis(),
        ));
        Ok(entry_id)
    }
}

#[async_trait]
impl EntryQueries for InMemoryStore {
    async fn list_entries(&self) -> anyhow::Result<Vec<EntryView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Entry read model offline"));
        }
        let state = self.state.read().await;
        Ok(state.views(&state.entries))
    }

    async fn list_entries_by_agent(&self, agent_id: &str) -> anyhow::Result<Vec<EntryView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Entry read model offline"));
        }
        let state = self.state.read().await;
        Ok(state.views(
            state
                .entries
                .iter()
                .filter(|entry| entry.assigned_agent_id == agent_id),
        ))
    }
}
