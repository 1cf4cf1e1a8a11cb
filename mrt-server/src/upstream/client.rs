//! HTTP client for the MRT website.

use std::time::Duration;

use tracing::debug;

use super::Fetcher;
use super::error::FetchError;

/// Station list and timetable endpoint on the MRT website.
///
/// The same endpoint serves both stations and schedules.
pub const DEFAULT_UPSTREAM_URL: &str = "https://www.jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// URL returning the station list
    pub stations_url: String,
    /// URL returning the schedule list
    pub schedules_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Create a config pointing both lookups at the default endpoint.
    pub fn new() -> Self {
        Self {
            stations_url: DEFAULT_UPSTREAM_URL.to_string(),
            schedules_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point both lookups at one URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.stations_url = url.clone();
        self.schedules_url = url;
        self
    }

    /// Set a custom stations URL.
    pub fn with_stations_url(mut self, url: impl Into<String>) -> Self {
        self.stations_url = url.into();
        self
    }

    /// Set a custom schedules URL.
    pub fn with_schedules_url(mut self, url: impl Into<String>) -> Self {
        self.schedules_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches payloads from the MRT website over HTTP.
///
/// Stateless apart from the connection pool inside `reqwest::Client`;
/// no retries and no caching.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new client with the configured timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http })
    }
}

impl Fetcher for UpstreamClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url, "fetching upstream payload");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "upstream payload received");

        Ok(body.to_vec())
    }
}
