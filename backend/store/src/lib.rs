//! `pixelvault-store` — durable metadata for the PixelVault service.
//!
//! Two SQLite-backed stores live here: the image metadata store (the source
//! of truth for "what assets exist") and the credential store backing login.
//! Each wraps one persistent `rusqlite` connection reused across requests.

pub mod credentials;
pub mod metadata;

pub use credentials::{CredentialStore, SqliteCredentialStore};
pub use metadata::ImageStore;
