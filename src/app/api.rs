//! API Facade for the application.
//!
//! Wires the filesystem, HTTP and terminal adapters into an `AppContext` and
//! runs the update command.

use std::path::Path;

use crate::adapters::readme_filesystem::{self, FilesystemReadmeStore};
use crate::adapters::terminal_interaction::TerminalInteraction;
use crate::adapters::version_check_http::HttpVersionCheck;
use crate::app::{AppContext, commands::update as update_command};

pub use crate::app::commands::update::UpdateOutcome;
pub use crate::domain::{AppError, RunConfig, RunMode, Version, VersionCheckConfig};

/// Run the update workflow against the readme named in `config`.
pub fn update(mode: RunMode, config: &RunConfig) -> Result<UpdateOutcome, AppError> {
    let readme = FilesystemReadmeStore::new(config.readme_path.clone());
    let versions = HttpVersionCheck::new(&config.version_check)?;
    let interaction = TerminalInteraction::new(config.field_key.clone());
    let ctx = AppContext::new(config.field_key.clone(), readme, versions, interaction);

    update_command::execute(&ctx, mode)
}

/// Read the trimmed value of header `key` from `path`.
pub fn read_field(key: &str, path: &Path) -> Result<String, AppError> {
    readme_filesystem::read_field(key, path)
}

/// Replace the value of header `key` in `path`.
pub fn write_field(key: &str, value: &str, path: &Path) -> Result<(), AppError> {
    readme_filesystem::write_field(key, value, path)
}

/// Fetch the latest WordPress version from the configured endpoint, as offered.
pub fn fetch_latest(config: &VersionCheckConfig) -> Result<String, AppError> {
    let versions = HttpVersionCheck::new(config)?;
    update_command::resolve_latest(&versions)
}
