use serde::{Deserialize, Serialize};

use crate::modules::distribution::core::entry::EntryId;

pub type AgentId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub assigned_entry_ids: Vec<EntryId>,
}

impl Agent {
    pub fn summary(&self) -> AgentSummary {
        AgentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Contact details of an agent, embedded in entry listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentSummary {
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Roster seed record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
    pub phone: String,
}
