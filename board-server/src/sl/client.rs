//! SL transport API HTTP client.
//!
//! The departures endpoint is open and needs no API key.

use tracing::debug;

use crate::domain::{Departure, SiteId};

use super::convert::convert_site_departures;
use super::error::SlError;
use super::types::SiteDeparturesResponse;

/// Default base URL for the SL transport API.
pub const DEFAULT_BASE_URL: &str = "https://transport.integration.sl.se/v1";

/// Default look-ahead window in minutes.
const DEFAULT_FORECAST_MINS: u16 = 60;

/// Configuration for the SL client.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// How far ahead to ask for departures, in minutes
    pub forecast_mins: u16,
}

impl SlConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            forecast_mins: DEFAULT_FORECAST_MINS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the forecast window.
    pub fn with_forecast(mut self, mins: u16) -> Self {
        self.forecast_mins = mins;
        self
    }
}

impl Default for SlConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// SL transport API client.
#[derive(Debug, Clone)]
pub struct SlClient {
    http: reqwest::Client,
    base_url: String,
    forecast_mins: u16,
}

impl SlClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SlConfig) -> Result<Self, SlError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            forecast_mins: config.forecast_mins,
        })
    }

    fn departures_url(&self, site: SiteId) -> String {
        format!("{}/sites/{}/departures", self.base_url, site)
    }

    /// Get upcoming departures from all stop points of a site.
    ///
    /// Departures come back in the order SL sends them (by expected time).
    pub async fn get_departures(&self, site: SiteId) -> Result<Vec<Departure>, SlError> {
        let url = self.departures_url(site);
        debug!(%site, %url, "fetching departures");

        let response = self
            .http
            .get(&url)
            .query(&[("forecast", self.forecast_mins.to_string())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SlError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SlError::SiteNotFound(site));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: SiteDeparturesResponse =
            serde_json::from_str(&body).map_err(|e| SlError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(convert_site_departures(&parsed, site))
    }
}
