//! Run configuration domain models.
//!
//! Built once from CLI arguments and passed explicitly; nothing is persisted.

use std::path::PathBuf;

use url::Url;

use crate::domain::TESTED_UP_TO;

/// Default readme location, relative to the plugin repository root.
pub const DEFAULT_README: &str = "readme.txt";

/// WordPress core version-check endpoint.
pub const DEFAULT_VERSION_CHECK_URL: &str = "https://api.wordpress.org/core/version-check/1.7/";

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Readme file to read and update.
    pub readme_path: PathBuf,
    /// Header key to update.
    pub field_key: String,
    /// Version-check API configuration.
    pub version_check: VersionCheckConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from(DEFAULT_README),
            field_key: TESTED_UP_TO.to_string(),
            version_check: VersionCheckConfig::default(),
        }
    }
}

/// Version-check API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheckConfig {
    /// Endpoint URL.
    pub api_url: Url,
}

impl Default for VersionCheckConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_VERSION_CHECK_URL).expect("Default API URL must be valid")
}
