use crate::modules::distribution::adapters::outbound::in_memory::InMemoryStore;
use crate::modules::distribution::core::ports::AgentRoster;
use crate::modules::distribution::use_cases::list_entries::queries_port::EntryQueries;
use crate::modules::distribution::use_cases::upload_entries::handler::UploadEntriesHandler;
use crate::shared::infrastructure::temp_storage::TempStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub upload_handler: Arc<UploadEntriesHandler<InMemoryStore>>,
    pub temp_storage: Arc<dyn TempStorage>,
    pub queries: Arc<dyn EntryQueries + Send + Sync>,
    pub roster: Arc<dyn AgentRoster>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryStore>, temp_storage: Arc<dyn TempStorage>) -> Self {
        Self {
            upload_handler: Arc::new(UploadEntriesHandler::new(
                store.clone(),
                temp_storage.clone(),
            )),
            temp_storage,
            queries: store.clone(),
            roster: store,
        }
    }
}
