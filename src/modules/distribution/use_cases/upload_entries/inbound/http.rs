use axum::{
    Json,
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::modules::distribution::use_cases::upload_entries::handler::{StagedUpload, UploadError};
use crate::modules::distribution::use_cases::upload_entries::parse::SourceFormat;
use crate::shell::state::AppState;

pub const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub entries_count: usize,
}

#[derive(Serialize)]
pub struct UploadErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_created: Option<usize>,
}

fn reject(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(UploadErrorResponse {
            message: message.into(),
            entries_created: None,
        }),
    )
        .into_response()
}

async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Bytes)>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            return Ok(Some((file_name, bytes)));
        }
    }
    Ok(None)
}

pub async fn handle(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return reject(StatusCode::BAD_REQUEST, "No file uploaded");
    };
    let (file_name, bytes) = match read_file_field(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => return reject(StatusCode::BAD_REQUEST, "No file uploaded"),
        Err(e) => return reject(e.status(), e.body_text()),
    };
    if SourceFormat::from_file_name(&file_name).is_none() {
        return reject(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported file type, expected .csv, .xlsx, .xlsm, .xls, .xlsb or .ods",
        );
    }
    // The extension only gates the upload; the content decides how it is read.
    let format = SourceFormat::sniff(&bytes);

    let file = match state.temp_storage.stash(&file_name, &bytes).await {
        Ok(file) => file,
        Err(e) => {
            error!(file_name = %file_name, error = %e, "upload could not be staged");
            return reject(StatusCode::INTERNAL_SERVER_ERROR, "Upload could not be stored");
        }
    };
    let upload = StagedUpload { file, format };

    match state.upload_handler.handle(&upload).await {
        Ok(outcome) => (
            StatusCode::CREATED,
            Json(UploadResponse {
                message: "File processed successfully".to_string(),
                entries_count: outcome.entries_count,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!(
                key = %upload.file.key,
                side_effect_free = e.is_side_effect_free(),
                "upload failed, staged file retained"
            );
            upload_error_response(e)
        }
    }
}

fn upload_error_response(error: UploadError) -> Response {
    match error {
        UploadError::Parse(_) | UploadError::Schema(_) | UploadError::NoAgents => {
            reject(StatusCode::BAD_REQUEST, error.to_string())
        }
        UploadError::Staging(e) => {
            error!(error = %e, "staged upload unreadable");
            reject(StatusCode::INTERNAL_SERVER_ERROR, "Upload could not be read")
        }
        UploadError::Persistence { created, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(UploadErrorResponse {
                message: error.to_string(),
                entries_created: Some(created),
            }),
        )
            .into_response(),
    }
}
