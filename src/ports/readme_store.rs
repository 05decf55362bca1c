//! Readme header field port definition.

use crate::domain::AppError;

/// Port for reading and rewriting a single header field of the readme.
pub trait ReadmeStore {
    /// Human-readable location of the readme, used in messages.
    fn location(&self) -> String;

    /// Return the trimmed value of `key`, or `FieldNotFound`.
    fn read_field(&self, key: &str) -> Result<String, AppError>;

    /// Replace the value of `key` and persist the document.
    ///
    /// Leaves the document untouched when `key` is absent.
    fn write_field(&self, key: &str, value: &str) -> Result<(), AppError>;
}
