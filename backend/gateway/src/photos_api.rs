//! Photo read endpoints.
//!
//! `GET /photos` — list all assets present in both stores.
//! `GET /photos/:filename` — raw bytes of one asset.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::reconcile;
use crate::server::AppState;
use media::detect_mime_type;

/// Handler for `GET /photos`.
pub async fn list_photos(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let photos = reconcile::list_photos(&state.metadata, &state.blobs).await?;
    Ok(Json(json!({ "photos": photos })))
}

/// Handler for `GET /photos/:filename`.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = reconcile::fetch_photo(&state.metadata, &state.blobs, &filename).await?;
    let mime = detect_mime_type(&state.blobs.path_of(&filename));
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, mime)], bytes).into_response())
}
