// Temporary storage for uploaded files between receipt and processing.
//
// The upload pipeline reads a staged file and discards it only once every
// entry has been created. A failed upload leaves its file in place.

pub mod in_memory;
pub mod local;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StagingError {
    #[error("staged file not found: {0}")]
    NotFound(String),

    #[error("staging backend error: {0}")]
    Backend(String),
}

/// Handle to a staged upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub key: String,
    pub original_name: String,
}

#[async_trait]
pub trait TempStorage: Send + Sync {
    async fn stash(&self, original_name: &str, bytes: &[u8]) -> Result<StagedFile, StagingError>;
    async fn read(&self, file: &StagedFile) -> Result<Vec<u8>, StagingError>;
    async fn discard(&self, file: &StagedFile) -> Result<(), StagingError>;
}
