//! `pixelvault-gateway` — the HTTP surface of the PixelVault service.
//!
//! Routes: multipart upload, photo listing, single-photo retrieval, blob
//! deletion, login, and static blob serving (mounted from the media crate).
//! Every failure is funneled through one [`error::ApiError`] conversion.

pub mod auth;
pub mod delete_api;
pub mod error;
pub mod photos_api;
pub mod reconcile;
pub mod server;
pub mod upload_api;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
