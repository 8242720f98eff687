use crate::modules::distribution::core::ports::{AgentRoster, EntryStore};
use crate::modules::distribution::use_cases::upload_entries::distribute::{
    DistributionError, distribute,
};
use crate::modules::distribution::use_cases::upload_entries::parse::{
    ParseError, SourceFormat, parse,
};
use crate::modules::distribution::use_cases::upload_entries::validate::{SchemaError, validate};
use crate::shared::infrastructure::temp_storage::{StagedFile, StagingError, TempStorage};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("no agents available")]
    NoAgents,

    #[error("persistence failed after {created} entries: {reason}")]
    Persistence { created: usize, reason: String },
}

impl UploadError {
    /// True when the upload failed before any entry was created.
    pub fn is_side_effect_free(&self) -> bool {
        !matches!(self, UploadError::Persistence { created, .. } if *created > 0)
    }
}

impl From<DistributionError> for UploadError {
    fn from(error: DistributionError) -> Self {
        match error {
            DistributionError::NoAgents => UploadError::NoAgents,
            DistributionError::Persistence { created, reason } => {
                UploadError::Persistence { created, reason }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUpload {
    pub file: StagedFile,
    pub format: SourceFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub entries_count: usize,
}

pub struct UploadEntriesHandler<TStore>
where
    TStore: AgentRoster + EntryStore + 'static,
{
    store: Arc<TStore>,
    temp_storage: Arc<dyn TempStorage>,
}

impl<TStore> UploadEntriesHandler<TStore>
where
    TStore: AgentRoster + EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>, temp_storage: Arc<dyn TempStorage>) -> Self {
        Self {
            store,
            temp_storage,
        }
    }

    /// Parses, validates and distributes a staged upload.
    ///
    /// The roster is read once, after validation. The staged file is discarded
    /// only when every entry was created; on failure it is left in place.
    pub async fn handle(&self, upload: &StagedUpload) -> Result<UploadOutcome, UploadError> {
        let rows = {
            let bytes = self.temp_storage.read(&upload.file).await?;
            parse(&bytes, upload.format)?
        };
        let drafts = validate(rows)?;

        let roster = self
            .store
            .list_agents()
            .await
            .map_err(|e| UploadError::Persistence {
                created: 0,
                reason: e.to_string(),
            })?;

        let report = distribute(&*self.store, &roster, drafts).await?;
        info!(
            file_name = %upload.file.original_name,
            entries_count = report.created(),
            agents = roster.len(),
            "upload distributed"
        );

        if let Err(error) = self.temp_storage.discard(&upload.file).await {
            warn!(key = %upload.file.key, error = %error, "staged upload could not be discarded");
        }

        Ok(UploadOutcome {
            entries_count: report.created(),
        })
    }
}
