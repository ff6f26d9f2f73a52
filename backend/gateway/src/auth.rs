//! Login endpoint.
//!
//! Credential verification is delegated to the injected
//! [`CredentialStore`](pixelvault_store::CredentialStore) collaborator. No
//! session or token is issued here.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::ApiError;
use crate::server::AppState;
use pixelvault_core::VaultError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Handler for `POST /login`.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let valid = state
        .credentials
        .verify(&request.email, &request.password)
        .await?;

    if valid {
        info!(email = %request.email, "Login successful");
        Ok(Json(json!({ "message": "Login successful" })))
    } else {
        Err(VaultError::InvalidCredentials.into())
    }
}
