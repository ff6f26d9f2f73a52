//! Static blob serving: serves stored files over HTTP.
//!
//! Provides a simple Axum router that serves blobs by filename from the
//! upload directory, with content-type headers. This is the fixed URL
//! prefix baked into every stored asset URL, so the route shape must stay
//! stable.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{debug, warn};

use crate::blob_store::BlobStore;
use crate::mime_detect::{detect_mime_type, is_inline_safe};

/// Build the static serving router.
///
/// Mount at the `/uploads` prefix:
///   GET /uploads/:filename  — serve a stored blob
pub fn uploads_router(store: BlobStore) -> Router {
    Router::new()
        .route("/:filename", get(serve_blob))
        .with_state(store)
}

/// GET /:filename — stream a blob from the upload directory.
async fn serve_blob(Path(filename): Path<String>, State(store): State<BlobStore>) -> Response {
    // Basic path sanitization: reject traversal.
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        warn!(filename = %filename, "Rejected suspicious blob path");
        return (StatusCode::BAD_REQUEST, "Invalid filename").into_response();
    }

    let path = store.path_of(&filename);
    debug!(path = %path.display(), "Serving blob");

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = detect_mime_type(&path);
            let disposition = if is_inline_safe(mime) {
                format!("inline; filename=\"{filename}\"")
            } else {
                format!("attachment; filename=\"{filename}\"")
            };

            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, mime.parse().unwrap());
            headers.insert(header::CONTENT_DISPOSITION, disposition.parse().unwrap());
            headers.insert(
                header::CACHE_CONTROL,
                "public, max-age=86400".parse().unwrap(),
            );
            headers.insert(
                header::CONTENT_LENGTH,
                bytes.len().to_string().parse().unwrap(),
            );

            (StatusCode::OK, headers, bytes).into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            (StatusCode::NOT_FOUND, "File not found on server").into_response()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read blob");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read file").into_response()
        }
    }
}
