pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod exit_codes;
pub mod logging;

pub use context::AppContext;
