//! User interaction port definition.
//!
//! Every prompt blocks until the user answers. `Ok(None)` means the user
//! cancelled the prompt (Esc / Ctrl-C), which is distinct from an error.

use crate::domain::{AppError, VersionSource};

/// Progress reported to the user while the workflow runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Value currently stored in the readme.
    Current(String),
    /// Latest version offered by the version-check API.
    Latest(String),
    /// Value written to the readme.
    Updated(String),
}

/// Port for prompting the user and displaying status.
pub trait Interaction {
    /// Ask whether the tool runs from the plugin repository root.
    fn confirm_plugin_root(&self) -> Result<Option<bool>, AppError>;

    /// Ask whether to set a custom version or the latest WordPress version.
    fn choose_source(&self) -> Result<Option<VersionSource>, AppError>;

    /// Ask for a custom version.
    ///
    /// `validate` returns an error message for input that must be re-entered.
    fn input_version(
        &self,
        initial: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, AppError>;

    /// Display a status line.
    fn report(&self, status: &Status);
}
