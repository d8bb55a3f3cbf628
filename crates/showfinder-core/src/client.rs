//! HTTP client for the TVMaze API
//!
//! Thin wrapper over `reqwest` that maps response statuses onto
//! [`ShowfinderError`]. There is no retry policy: a failed request is
//! reported to the caller as-is.

use std::time::Duration;

use crate::error::{Result, ShowfinderError};
use crate::url::TVMAZE_BASE_URL;

const USER_AGENT: &str = concat!("showfinder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root (default: "https://api.tvmaze.com")
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for the TVMaze JSON endpoints
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an http(s) URL
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ShowfinderError::InvalidUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ShowfinderError::HttpError)?;

        Ok(Self { client, base_url })
    }

    /// API root requests are issued against, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of a GET request
    ///
    /// # Arguments
    /// * `url` - Absolute URL, usually built with [`crate::url`]
    ///
    /// # Errors
    /// - `HttpError` - Network or transport errors
    /// - `NotFound` - Server returned 404
    /// - `RateLimited` - Server returned 429
    /// - `UnexpectedStatus` - Any other non-success status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ShowfinderError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ShowfinderError::RateLimited);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ShowfinderError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(ShowfinderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(ShowfinderError::HttpError)
    }
}
