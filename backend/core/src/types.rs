use serde::{Deserialize, Serialize};

/// A stored asset: one metadata row paired with one blob on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    /// Row id assigned by the metadata store on insert.
    pub id: i64,
    /// Generated blob filename, never user-derived.
    pub filename: String,
    /// Fully-qualified public locator, persisted at ingest time.
    pub url: String,
}

/// The `{filename, url}` pair returned to clients for a stored blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub url: String,
}

impl From<Asset> for StoredFile {
    fn from(asset: Asset) -> Self {
        Self {
            filename: asset.filename,
            url: asset.url,
        }
    }
}

/// An incoming file payload as received from the client, before any
/// validation or renaming.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The client-supplied name. Used only to derive the extension.
    pub original_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_name: original_name.into(),
            bytes,
        }
    }

    /// The extension of the original name, without the dot. Empty when the
    /// name has none.
    pub fn extension(&self) -> &str {
        match self.original_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext,
            _ => "",
        }
    }
}
