//! Multipart upload endpoint.
//!
//! `POST /upload` — accepts one or more files in the multipart `files`
//! field and hands them to the ingest pipeline as a single batch.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::ApiError;
use crate::server::AppState;
use pixelvault_core::UploadedFile;

/// Handler for `POST /upload`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Failed to read multipart field");
        ApiError::BadRequest("Invalid multipart payload".to_string())
    })? {
        // Only the `files` field carries uploads; anything else is ignored.
        if field.name() != Some("files") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read multipart body");
            ApiError::BadRequest("Invalid multipart payload".to_string())
        })?;

        files.push(UploadedFile::new(original_name, bytes.to_vec()));
    }

    let stored = state.pipeline.ingest(files).await?;
    Ok(Json(json!({
        "message": "Files uploaded successfully",
        "files": stored,
    })))
}
