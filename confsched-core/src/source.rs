//! HTTP client for fetching schedule pages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

const DEFAULT_RETRIES: u32 = 1;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// How non-2xx responses are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Fail with [`ScheduleError::HttpStatus`].
    #[default]
    Strict,
    /// Return the body whatever the status.
    Lenient,
}

/// Fetches raw schedule bytes over HTTP.
#[derive(Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    status_policy: StatusPolicy,
    retries: u32,
    retry_backoff: Duration,
}

impl Default for ScheduleClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleClient {
    pub fn new() -> Self {
        ScheduleClient {
            http: reqwest::Client::new(),
            status_policy: StatusPolicy::default(),
            retries: DEFAULT_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(timeout: Duration) -> ScheduleResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScheduleError::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(ScheduleClient {
            http,
            ..Self::new()
        })
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    /// Number of extra attempts after a network failure, and the pause before each.
    pub fn retries(mut self, retries: u32, backoff: Duration) -> Self {
        self.retries = retries;
        self.retry_backoff = backoff;
        self
    }

    /// GET `url` and return the full response body.
    ///
    /// Connection failures are retried; HTTP status errors are not.
    pub async fn fetch(&self, url: &str) -> ScheduleResult<Vec<u8>> {
        let mut attempt = 0;

        loop {
            match self.fetch_once(url).await {
                Err(ScheduleError::Network { message, .. }) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!(
                        url,
                        attempt,
                        error = %message,
                        "schedule request failed, retrying"
                    );
                    tokio::time::sleep(self.retry_backoff).await;
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> ScheduleResult<Vec<u8>> {
        tracing::debug!(url, "fetching schedule");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            match self.status_policy {
                StatusPolicy::Strict => {
                    return Err(ScheduleError::HttpStatus {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                StatusPolicy::Lenient => {
                    tracing::warn!(url, status = status.as_u16(), "using body of unsuccessful response");
                }
            }
        }

        let body = resp.bytes().await.map_err(|e| network_error(url, e))?;
        tracing::debug!(url, bytes = body.len(), "fetched schedule");

        Ok(body.to_vec())
    }
}

fn network_error(url: &str, err: reqwest::Error) -> ScheduleError {
    ScheduleError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}
