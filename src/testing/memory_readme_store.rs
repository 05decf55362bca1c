use std::cell::{Cell, RefCell};

use crate::domain::{AppError, find_field, replace_field};
use crate::ports::ReadmeStore;

/// In-memory readme store for testing.
#[derive(Debug, Default)]
pub struct MemoryReadmeStore {
    pub content: RefCell<String>,
    pub writes: Cell<usize>,
}

impl MemoryReadmeStore {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: RefCell::new(content.into()), writes: Cell::new(0) }
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ReadmeStore for MemoryReadmeStore {
    fn location(&self) -> String {
        "memory://readme.txt".to_string()
    }

    fn read_field(&self, key: &str) -> Result<String, AppError> {
        let content = self.content.borrow();
        find_field(&content, key)
            .map(|field| field.value.to_string())
            .ok_or_else(|| AppError::FieldNotFound { key: key.to_string(), path: self.location() })
    }

    fn write_field(&self, key: &str, value: &str) -> Result<(), AppError> {
        let updated = replace_field(&self.content.borrow(), key, value).ok_or_else(|| {
            AppError::FieldNotFound { key: key.to_string(), path: self.location() }
        })?;
        *self.content.borrow_mut() = updated;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
