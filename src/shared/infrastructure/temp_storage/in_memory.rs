use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::shared::infrastructure::temp_storage::{StagedFile, StagingError, TempStorage};

#[derive(Default)]
pub struct InMemoryTempStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
    is_offline: bool,
}

impl InMemoryTempStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn contains(&self, file: &StagedFile) -> bool {
        self.files.lock().await.contains_key(&file.key)
    }

    pub async fn staged_count(&self) -> usize {
        self.files.lock().await.len()
    }

    fn ensure_online(&self) -> Result<(), StagingError> {
        if self.is_offline {
            return Err(StagingError::Backend("temp storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TempStorage for InMemoryTempStorage {
    async fn stash(&self, original_name: &str, bytes: &[u8]) -> Result<StagedFile, StagingError> {
        self.ensure_online()?;
        let file = StagedFile {
            key: Uuid::now_v7().to_string(),
            original_name: original_name.to_string(),
        };
        self.files
            .lock()
            .await
            .insert(file.key.clone(), bytes.to_vec());
        Ok(file)
    }

    async fn read(&self, file: &StagedFile) -> Result<Vec<u8>, StagingError> {
        self.ensure_online()?;
        self.files
            .lock()
            .await
            .get(&file.key)
            .cloned()
            .ok_or_else(|| StagingError::NotFound(file.key.clone()))
    }

    async fn discard(&self, file: &StagedFile) -> Result<(), StagingError> {
        self.ensure_online()?;
        self.files
            .lock()
            .await
            .remove(&file.key)
            .map(|_| ())
            .ok_or_else(|| StagingError::NotFound(file.key.clone()))
    }
}
