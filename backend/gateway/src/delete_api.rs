//! Photo deletion endpoint.
//!
//! `DELETE /delete/:filename` — remove an asset from both stores, blob
//! first. A missing blob is a 404 before anything is touched.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::reconcile;
use crate::server::AppState;

/// Handler for `DELETE /delete/:filename`.
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<Value>, ApiError> {
    reconcile::delete_photo(&state.metadata, &state.blobs, &filename).await?;
    info!(filename = %filename, "Deleted asset");
    Ok(Json(json!({ "message": "File deleted successfully" })))
}
