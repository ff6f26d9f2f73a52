pub mod error;
pub mod types;

pub use error::VaultError;
pub use types::{Asset, StoredFile, UploadedFile};
