pub mod configuration;
pub mod error;
pub mod header;
pub mod run_mode;
pub mod version;

pub use configuration::{DEFAULT_README, DEFAULT_VERSION_CHECK_URL, RunConfig, VersionCheckConfig};
pub use error::AppError;
pub use header::{HeaderField, TESTED_UP_TO, find_field, replace_field};
pub use run_mode::{RunMode, VersionSource};
pub use version::{Version, normalize};
