use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, find_field, replace_field};
use crate::ports::ReadmeStore;

/// Filesystem-based readme store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemReadmeStore {
    path: PathBuf,
}

impl FilesystemReadmeStore {
    /// Create a store for the readme at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadmeStore for FilesystemReadmeStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_field(&self, key: &str) -> Result<String, AppError> {
        read_field(key, &self.path)
    }

    fn write_field(&self, key: &str, value: &str) -> Result<(), AppError> {
        write_field(key, value, &self.path)
    }
}

/// Read the trimmed value of header `key` from the file at `path`.
pub fn read_field(key: &str, path: &Path) -> Result<String, AppError> {
    let content = fs::read_to_string(path)?;
    let field = find_field(&content, key).ok_or_else(|| field_not_found(key, path))?;
    tracing::debug!(
        key,
        line = field.line,
        value = field.value,
        path = %path.display(),
        "read header field"
    );
    Ok(field.value.to_string())
}

/// Replace the value of header `key` in the file at `path`.
///
/// The file is only rewritten when the key is present.
pub fn write_field(key: &str, value: &str, path: &Path) -> Result<(), AppError> {
    let content = fs::read_to_string(path)?;
    let updated = replace_field(&content, key, value).ok_or_else(|| field_not_found(key, path))?;
    fs::write(path, updated)?;
    tracing::debug!(key, value, path = %path.display(), "wrote header field");
    Ok(())
}

fn field_not_found(key: &str, path: &Path) -> AppError {
    AppError::FieldNotFound { key: key.to_string(), path: path.display().to_string() }
}
