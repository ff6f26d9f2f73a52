//! Main HTTP server: route table, shared state, and the serve loop.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use media::BlobStore;
use pixelvault_ingest::IngestPipeline;
use pixelvault_store::{CredentialStore, ImageStore};

use crate::{auth, delete_api, photos_api, upload_api};

/// Application state shared across routes.
///
/// Every handle here is constructed once at startup and injected; nothing
/// is process-global.
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<ImageStore>,
    pub blobs: BlobStore,
    pub pipeline: Arc<IngestPipeline>,
    pub credentials: Arc<dyn CredentialStore>,
}

/// Build the Axum router with all API routes.
pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let blobs = state.blobs.clone();

    Router::new()
        // The 50 MiB cap is enforced per file by upload validation, so the
        // transport-level body limit is lifted here.
        .route(
            "/upload",
            post(upload_api::upload).layer(DefaultBodyLimit::disable()),
        )
        .route("/photos", get(photos_api::list_photos))
        .route("/photos/:filename", get(photos_api::get_photo))
        .route("/delete/:filename", delete(delete_api::delete_photo))
        .route("/login", post(auth::login))
        .route("/api/health", get(health))
        .with_state(state)
        // Static blob serving under the fixed prefix baked into stored URLs.
        .nest("/uploads", media::uploads_router(blobs))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
}

/// Starts the HTTP server and serves until the process exits.
pub async fn start_server(bind_address: &str, port: u16, app: Router) -> Result<()> {
    let addr = format!("{bind_address}:{port}");
    info!(addr = %addr, "HTTP API listening");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => {
                warn!(origin = %origin, "Unparseable CORS origin; allowing any");
                CorsLayer::permissive()
            }
        },
        None => CorsLayer::permissive(),
    }
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pixelvault",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Catch-all for unmatched routes.
async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelvault_store::SqliteCredentialStore;

    #[tokio::test]
    async fn router_builds_with_injected_state() {
        let dir =
            std::env::temp_dir().join(format!("pixelvault-server-{}", uuid::Uuid::new_v4()));
        let blobs = BlobStore::open(&dir).await.unwrap();
        let metadata = Arc::new(ImageStore::in_memory().unwrap());
        let pipeline = Arc::new(IngestPipeline::new(
            blobs.clone(),
            metadata.clone(),
            "http://localhost:3000",
        ));
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(SqliteCredentialStore::in_memory().unwrap());

        let state = AppState {
            metadata,
            blobs,
            pipeline,
            credentials,
        };

        let _router = build_router(state, Some("https://photos.example.com"));
        let _ = std::fs::remove_dir_all(dir);
    }
}
