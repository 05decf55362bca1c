//! Version-check API port definition.

use crate::domain::AppError;

/// Port for resolving the latest released platform version.
pub trait VersionCheck {
    /// Return the version string of the first offer.
    fn latest_version(&self) -> Result<String, AppError>;
}
