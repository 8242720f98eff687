use serde::Serialize;

use crate::modules::distribution::core::agent::AgentSummary;
use crate::modules::distribution::core::entry::{Entry, EntryId, EntryStatus};

/// An entry joined with the contact details of its agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub first_name: String,
    pub phone: String,
    pub notes: String,
    pub status: EntryStatus,
    /// `None` once the agent no longer exists.
    pub assigned_agent: Option<AgentSummary>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl EntryView {
    pub fn join(entry: &Entry, agent: Option<AgentSummary>) -> Self {
        Self {
            id: entry.id.clone(),
            first_name: entry.first_name.clone(),
            phone: entry.phone.clone(),
            notes: entry.notes.clone(),
            status: entry.status,
            assigned_agent: agent,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Sorts newest first; entries sharing a timestamp keep the later-created one first.
pub fn newest_first<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Vec<&'a Entry> {
    let mut entries: Vec<&Entry> = entries.into_iter().collect();
    entries.sort_by_key(|entry| entry.created_at);
    entries.reverse();
    entries
}
