// src/net/session.rs
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};

use tracing::{debug, info};

use crate::errors::ScrapeError;
use crate::net::retry::RetryPolicy;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const POOL_MAX_IDLE_PER_HOST: usize = 20;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 3,
        }
    }
}

/// One pooled blocking client with browser-like defaults, shared across a
/// scrape run. Dropping the manager releases the pooled connections, so a
/// scope owns the session for exactly as long as it needs it.
pub struct SessionManager {
    client: Client,
    retry: RetryPolicy,
}

impl SessionManager {
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(browser_headers())
            .timeout(config.timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        info!("session manager ready");
        Ok(Self {
            client,
            retry: RetryPolicy {
                max_retries: config.max_retries,
                ..RetryPolicy::default()
            },
        })
    }

    /// GET with retries. Non-2xx statuses are errors, and transient ones
    /// (timeouts, connection resets, the statuses themselves) are retried
    /// under the session's policy.
    pub fn get(&self, url: &str) -> Result<Response, ScrapeError> {
        self.get_with(url, |req| req)
    }

    /// GET with a hook on the request builder for per-request options such
    /// as query parameters or header overrides.
    pub fn get_with<F>(&self, url: &str, customize: F) -> Result<Response, ScrapeError>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        self.retry.call(|| {
            debug!(url, "GET");
            customize(self.client.get(url))
                .send()
                .and_then(Response::error_for_status)
                .map_err(|e| ScrapeError::Network(e.to_string()))
        })
    }
}

// Accept-Encoding is left to the client: reqwest advertises and transparently
// decodes the compression features enabled on it.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        "Upgrade-Insecure-Requests",
        HeaderValue::from_static("1"),
    );
    headers
}
