//! Handlers for file upload and download.
//!
//! Uploaded bytes are written whole to a local directory; the record's
//! `url` field stores that path verbatim and is used directly for later
//! reads. There is no size cap and no collision guard beyond the
//! millisecond-timestamp-plus-filename naming scheme.

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use tally_core::error::CoreError;
use tally_core::records::FileMeta;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fallback content type when the upload does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

fn file_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "File",
        id: id.to_string(),
    })
}

/// POST /files
///
/// Accepts a multipart form with a required `file` field. The bytes are
/// written under the configured upload directory and a File record
/// pointing at that path is created and returned.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                upload = Some((filename, content_type, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, content_type, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored_name = format!("{}_{}", chrono::Utc::now().timestamp_millis(), filename);
    let path = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let meta = FileMeta {
        filename,
        content_type: content_type.unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        url: path.to_string_lossy().into_owned(),
        size: data.len() as i64,
    };
    let record = state.files.create(meta).await?;

    tracing::info!(
        id = %record.id,
        filename = %record.data.filename,
        size = record.data.size,
        "File uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// GET /files/{id}
///
/// Serve the stored bytes with the recorded content type. A missing
/// record and a record whose path is gone from disk surface identically
/// as not-found.
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let record = state
        .files
        .get(&id)
        .await?
        .ok_or_else(|| file_not_found(&id))?;

    let bytes = tokio::fs::read(&record.data.url)
        .await
        .map_err(|_| file_not_found(&id))?;

    Ok((
        [(header::CONTENT_TYPE, record.data.content_type.clone())],
        bytes,
    )
        .into_response())
}
