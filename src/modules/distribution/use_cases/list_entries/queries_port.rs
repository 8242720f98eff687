use crate::modules::distribution::use_cases::list_entries::projection::EntryView;
use async_trait::async_trait;

#[async_trait]
pub trait EntryQueries {
    /// Every entry, newest first.
    async fn list_entries(&self) -> anyhow::Result<Vec<EntryView>>;

    /// Entries assigned to `agent_id`, newest first.
    async fn list_entries_by_agent(&self, agent_id: &str) -> anyhow::Result<Vec<EntryView>>;
}
