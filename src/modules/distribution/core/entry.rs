use serde::{Deserialize, Serialize};

use crate::modules::distribution::core::agent::AgentId;

pub type EntryId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::InProgress => "in-progress",
            EntryStatus::Completed => "completed",
        }
    }
}

/// A validated contact record that has not been assigned yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub first_name: String,
    pub phone: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub first_name: String,
    pub phone: String,
    pub notes: String,
    pub assigned_agent_id: AgentId,
    pub status: EntryStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Entry {
    pub fn assign(id: EntryId, draft: &EntryDraft, agent_id: &str, now: i64) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            phone: draft.phone.clone(),
            notes: draft.notes.clone(),
            assigned_agent_id: agent_id.to_string(),
            status: EntryStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
