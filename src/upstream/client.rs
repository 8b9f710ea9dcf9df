//! HTTP client for the upstream wait-time API.

use std::time::Duration;

use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::upstream::types::Attraction;

/// Errors that can occur while fetching wait times.
///
/// Each variant names the stage that failed and carries the underlying
/// cause, so the surfaced error is self-describing. None of these are
/// retried or recovered internally.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be issued or the response body not read
    /// (connect failure, TLS failure, timeout).
    #[error("failed to issue wait time GET: {0}")]
    Request(#[source] reqwest::Error),

    /// Upstream answered with a non-200 status.
    #[error("failed to GET wait times ({status}): {body}")]
    Status { status: u16, body: String },

    /// Upstream answered 200 but the body was not an array of attractions.
    #[error("failed to unmarshal wait time attractions: {0}")]
    Unmarshal(#[source] serde_json::Error),
}

impl FetchError {
    /// Whether the failure was the configured timeout expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

/// Client for the upstream theme-park wait-time API.
///
/// Cheap to clone; the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct WaitTimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl WaitTimeClient {
    /// Build a client with the configured timeouts.
    ///
    /// The connect timeout bounds connection establishment and the request
    /// timeout bounds the whole call including the body read. TLS handshake
    /// time is covered by these; reqwest has no separate handshake knob.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current attraction list for a park, in upstream order.
    ///
    /// The park identifier is substituted into the URL verbatim; upstream
    /// decides whether it names a real park.
    pub async fn fetch_wait_times(&self, park_id: &str) -> Result<Vec<Attraction>, FetchError> {
        let url = format!("{}/parks/{}/waittime", self.base_url, park_id);

        tracing::debug!(park_id = %park_id, url = %url, "Fetching wait times");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        // Read the body on every path so the connection is released whether
        // the call succeeded or not.
        let body = response.text().await.map_err(FetchError::Request)?;

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(FetchError::Unmarshal)
    }
}
