//! Stable exit codes for the CLI.

/// The readme was updated.
pub const OK: i32 = 0;
/// Validation, missing field, network or I/O failure. Nothing was written.
pub const ERROR: i32 = 1;
/// The user declined the directory check or cancelled a prompt. Nothing was written.
pub const ABORTED: i32 = 2;
