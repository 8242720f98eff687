use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::shared::infrastructure::temp_storage::{StagedFile, StagingError, TempStorage};

/// Stages uploads as files in a local directory.
///
/// Files are named by a fresh id plus the original extension; the client's
/// file name never becomes part of the path.
#[derive(Debug, Clone)]
pub struct LocalTempStorage {
    dir: PathBuf,
}

impl LocalTempStorage {
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self, StagingError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| StagingError::Backend(format!("{}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    pub fn path_of(&self, file: &StagedFile) -> PathBuf {
        self.dir.join(&file.key)
    }
}

fn io_error(file: &StagedFile, error: std::io::Error) -> StagingError {
    match error.kind() {
        ErrorKind::NotFound => StagingError::NotFound(file.key.clone()),
        _ => StagingError::Backend(error.to_string()),
    }
}

#[async_trait]
impl TempStorage for LocalTempStorage {
    async fn stash(&self, original_name: &str, bytes: &[u8]) -> Result<StagedFile, StagingError> {
        let id = Uuid::now_v7();
        let key = match Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{id}.{}", ext.to_ascii_lowercase()),
            None => id.to_string(),
        };
        let file = StagedFile {
            key,
            original_name: original_name.to_string(),
        };
        tokio::fs::write(self.path_of(&file), bytes)
            .await
            .map_err(|e| io_error(&file, e))?;
        debug!(key = %file.key, size = bytes.len(), "upload staged");
        Ok(file)
    }

    async fn read(&self, file: &StagedFile) -> Result<Vec<u8>, StagingError> {
        tokio::fs::read(self.path_of(file))
            .await
            .map_err(|e| io_error(file, e))
    }

    async fn discard(&self, file: &StagedFile) -> Result<(), StagingError> {
        tokio::fs::remove_file(self.path_of(file))
            .await
            .map_err(|e| io_error(file, e))?;
        debug!(key = %file.key, "staged upload discarded");
        Ok(())
    }
}
