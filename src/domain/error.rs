use std::io;

use thiserror::Error;

/// Library-wide error type for tested-up-to operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Version string could not be coerced into `major.minor.patch`.
    #[error("Invalid version '{0}': enter a valid version, e.g. major.minor.patch i.e. 5.3.2")]
    InvalidVersion(String),

    /// The header key is absent from the readme.
    #[error("Field '{key}' not found in {path}")]
    FieldNotFound { key: String, path: String },

    /// Version-check API request or response failure.
    #[error("Version check failed: {message}")]
    VersionCheck { message: String, status: Option<u16> },

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn version_check<S: Into<String>>(message: S) -> Self {
        AppError::VersionCheck { message: message.into(), status: None }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidVersion(_) => io::ErrorKind::InvalidInput,
            AppError::FieldNotFound { .. } => io::ErrorKind::NotFound,
            AppError::VersionCheck { .. } | AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
