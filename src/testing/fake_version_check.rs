use std::cell::Cell;

use crate::domain::AppError;
use crate::ports::VersionCheck;

/// Version-check fake returning a canned answer.
#[derive(Debug)]
pub struct FakeVersionCheck {
    response: Result<String, String>,
    pub calls: Cell<usize>,
}

impl FakeVersionCheck {
    pub fn returning(version: impl Into<String>) -> Self {
        Self { response: Ok(version.into()), calls: Cell::new(0) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { response: Err(message.into()), calls: Cell::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl VersionCheck for FakeVersionCheck {
    fn latest_version(&self) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        self.response.clone().map_err(AppError::version_check)
    }
}
