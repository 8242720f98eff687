use thiserror::Error;
use tracing::{debug, error};

use crate::modules::distribution::core::agent::{Agent, AgentId};
use crate::modules::distribution::core::entry::{EntryDraft, EntryId};
use crate::modules::distribution::core::ports::EntryStore;
use crate::modules::distribution::core::rotation::Rotation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("no agents available")]
    NoAgents,

    #[error("persistence failed after {created} entries: {reason}")]
    Persistence { created: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub entry_id: EntryId,
    pub agent_id: AgentId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionReport {
    pub assignments: Vec<Assignment>,
    pub rotation: Rotation,
}

impl DistributionReport {
    pub fn created(&self) -> usize {
        self.assignments.len()
    }
}

/// Assigns each draft, in order, to the next agent of `roster`.
///
/// Each entry is created and linked to its agent before the next draft is
/// touched. The batch is not transactional: on failure every earlier entry
/// stays persisted and the error carries how many were created.
pub async fn distribute<TStore>(
    store: &TStore,
    roster: &[Agent],
    drafts: Vec<EntryDraft>,
) -> Result<DistributionReport, DistributionError>
where
    TStore: EntryStore + ?Sized,
{
    let mut rotation = Rotation::start(roster.len()).ok_or(DistributionError::NoAgents)?;
    let mut assignments = Vec::with_capacity(drafts.len());

    for draft in &drafts {
        let (index, next) = rotation.advance();
        let agent_id = &roster[index].id;

        let entry_id = store.assign_entry(draft, agent_id).await.map_err(|e| {
            error!(
                created = assignments.len(),
                agent_id = %agent_id,
                error = %e,
                "entry assignment failed"
            );
            DistributionError::Persistence {
                created: assignments.len(),
                reason: e.to_string(),
            }
        })?;
        debug!(entry_id = %entry_id, agent_id = %agent_id, "entry assigned");

        assignments.push(Assignment {
            entry_id,
            agent_id: agent_id.clone(),
        });
        rotation = next;
    }

    Ok(DistributionReport {
        assignments,
        rotation,
    })
}
