use thiserror::Error;

/// Top-level error type for the PixelVault service.
///
/// Covers the full failure taxonomy: client input errors, the two not-found
/// causes split by which store lacks the resource, credential rejection, and
/// infrastructure failures. The gateway converts this into an HTTP response
/// exactly once.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Only image files are allowed!")]
    InvalidExtension(String),

    #[error("File size is too large")]
    FileTooLarge { filename: String, size: usize },

    #[error("Please select files to upload")]
    NoFilesSelected,

    #[error("Image not found in database")]
    RecordNotFound(String),

    #[error("Image file not found on server")]
    BlobNotFound(String),

    #[error("No images found")]
    NoImages,

    #[error("No images found in the uploads folder")]
    NoImagesOnDisk,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("database error: {0}")]
    Database(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VaultError {
    /// Whether this error is caused by the client's input rather than the
    /// service's own stores.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            VaultError::InvalidExtension(_)
                | VaultError::FileTooLarge { .. }
                | VaultError::NoFilesSelected
                | VaultError::RecordNotFound(_)
                | VaultError::BlobNotFound(_)
                | VaultError::NoImages
                | VaultError::NoImagesOnDisk
                | VaultError::InvalidCredentials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_classified() {
        assert!(VaultError::NoFilesSelected.is_client_error());
        assert!(VaultError::BlobNotFound("a.png".into()).is_client_error());
        assert!(!VaultError::Storage("disk full".into()).is_client_error());
    }

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            VaultError::InvalidExtension("virus.exe".into()).to_string(),
            "Only image files are allowed!"
        );
        assert_eq!(
            VaultError::RecordNotFound("x.png".into()).to_string(),
            "Image not found in database"
        );
        assert_eq!(
            VaultError::BlobNotFound("x.png".into()).to_string(),
            "Image file not found on server"
        );
    }
}
