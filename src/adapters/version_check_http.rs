//! WordPress version-check client implementation using reqwest.

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, VersionCheckConfig};
use crate::ports::VersionCheck;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the version-check API.
///
/// One GET per call; no retries and no caching.
#[derive(Debug, Clone)]
pub struct HttpVersionCheck {
    api_url: Url,
    client: Client,
}

impl HttpVersionCheck {
    /// Create a new HTTP client for the configured endpoint.
    pub fn new(config: &VersionCheckConfig) -> Result<Self, AppError> {
        let client = Client::builder().user_agent(USER_AGENT).build().map_err(|e| {
            AppError::version_check(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Deserialize)]
struct VersionCheckResponse {
    #[serde(default)]
    offers: Vec<Offer>,
}

#[derive(Debug, Deserialize)]
struct Offer {
    version: String,
}

impl VersionCheck for HttpVersionCheck {
    fn latest_version(&self) -> Result<String, AppError> {
        tracing::debug!(url = %self.api_url, "requesting latest version");

        let response = self
            .client
            .get(self.api_url.clone())
            .send()
            .map_err(|e| AppError::version_check(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().map_err(|e| AppError::VersionCheck {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        if !status.is_success() {
            return Err(AppError::VersionCheck {
                message: format!("Unexpected response status {}", status),
                status: Some(status.as_u16()),
            });
        }

        let parsed: VersionCheckResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::VersionCheck {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        let version = parsed.offers.into_iter().next().map(|offer| offer.version).ok_or_else(
            || AppError::VersionCheck {
                message: "No offers in response".into(),
                status: Some(status.as_u16()),
            },
        )?;

        tracing::debug!(%version, "resolved latest version");
        Ok(version)
    }
}
