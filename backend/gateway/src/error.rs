//! HTTP error mapping.
//!
//! The whole failure taxonomy is converted to a response in exactly one
//! place. Client-input and not-found classes carry their descriptive
//! messages; infrastructure classes are logged server-side and answered
//! with a generic 500 body so internal detail never reaches the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use pixelvault_core::VaultError;

#[derive(Debug)]
pub enum ApiError {
    Vault(VaultError),
    /// Request body could not be read as the expected shape.
    BadRequest(String),
}

impl From<VaultError> for ApiError {
    fn from(err: VaultError) -> Self {
        ApiError::Vault(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Vault(VaultError::Other(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Vault(err) => vault_response(err),
        }
    }
}

fn vault_response(err: VaultError) -> Response {
    let message = err.to_string();
    match &err {
        VaultError::InvalidExtension(_)
        | VaultError::FileTooLarge { .. }
        | VaultError::NoFilesSelected => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }

        VaultError::RecordNotFound(_) | VaultError::BlobNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
        }

        // The listing endpoint reports its empty states under `message`.
        VaultError::NoImages | VaultError::NoImagesOnDisk => {
            (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
        }

        VaultError::InvalidCredentials => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
        }

        VaultError::Storage(_) | VaultError::Database(_) | VaultError::Other(_) => {
            error!(error = %err, "Request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
                .into_response()
        }
    }
}
