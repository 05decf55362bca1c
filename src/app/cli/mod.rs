//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::app::api::{self, UpdateOutcome};
use crate::app::{exit_codes, logging};
use crate::domain::{
    AppError, DEFAULT_README, DEFAULT_VERSION_CHECK_URL, RunConfig, RunMode, TESTED_UP_TO,
    VersionCheckConfig,
};

#[derive(Parser)]
#[command(name = "tested-up-to")]
#[command(version)]
#[command(
    about = "Update the \"Tested up to\" version of a WordPress plugin readme",
    long_about = "Update the \"Tested up to\" version of a WordPress plugin readme.\n\n\
                  Without flags the tool asks whether to set a custom version or the \
                  latest WordPress version."
)]
struct Cli {
    /// Update to the latest WordPress version
    #[arg(short, long, conflicts_with = "custom")]
    latest: bool,
    /// Update to a custom version, e.g. 6.1.1
    #[arg(short, long, value_name = "VERSION")]
    custom: Option<String>,
    /// Readme file to update
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_README)]
    file: PathBuf,
    /// Print debug information
    #[arg(short, long)]
    debug: bool,
    /// Version-check API endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_VERSION_CHECK_URL, hide = true)]
    api_url: Url,
}

impl Cli {
    fn into_parts(self) -> (RunMode, RunConfig) {
        let mode = RunMode::from_flags(self.latest, self.custom);
        let config = RunConfig {
            readme_path: self.file,
            field_key: TESTED_UP_TO.to_string(),
            version_check: VersionCheckConfig { api_url: self.api_url },
        };
        (mode, config)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let (mode, config) = cli.into_parts();
    tracing::debug!(?mode, ?config, "parsed arguments");

    let exit_code = report(api::update(mode, &config));
    if exit_code != exit_codes::OK {
        std::process::exit(exit_code);
    }
}

fn report(result: Result<UpdateOutcome, AppError>) -> i32 {
    match result {
        Ok(UpdateOutcome::Updated { .. }) => exit_codes::OK,
        Ok(UpdateOutcome::Declined) => {
            eprintln!("Run this from the root directory of your WordPress plugin's repository.");
            exit_codes::ABORTED
        }
        Ok(UpdateOutcome::Cancelled) => {
            eprintln!("Cancelled. The readme was not changed.");
            exit_codes::ABORTED
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::ERROR
        }
    }
}
