//! tested-up-to: read and update the "Tested up to" field of a WordPress plugin readme.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{UpdateOutcome, fetch_latest, read_field, update, write_field};
pub use domain::{
    AppError, RunConfig, RunMode, TESTED_UP_TO, Version, VersionCheckConfig, normalize,
};
