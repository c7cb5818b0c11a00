//! HTTP client for Reddit API communication.
//!
//! This module provides [`RedditClient`], the executor collaborator the
//! pagination engine delegates to. The client owns base-URI construction,
//! default headers, rate-limit bookkeeping and the retry policy; the engine
//! invokes it exactly once per page advance.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_response::HttpResponse;
use crate::config::RedditConfig;

/// Fixed retry wait time in seconds when the server gives no hint.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URI for authenticated Reddit API requests.
const DEFAULT_BASE_URI: &str = "https://oauth.reddit.com";

/// HTTP client for making requests to the Reddit API.
///
/// The client handles:
/// - Base URI construction (default `https://oauth.reddit.com`, overridable
///   via [`crate::ApiHost`] for proxies and tests)
/// - Default headers including the mandatory User-Agent and optional
///   `Authorization: Bearer` token
/// - Retry logic for 429 and 500 responses, honoring `Retry-After`
/// - Rate-limit header parsing and logging
///
/// # Thread Safety
///
/// `RedditClient` is `Send + Sync`; a single client can serve any number of
/// independent paginators concurrently.
///
/// # Example
///
/// ```rust,ignore
/// use reddit_api::{RedditClient, RedditConfig, UserAgent};
///
/// let config = RedditConfig::builder()
///     .user_agent(UserAgent::new("linux:com.example.app:v0.1.0 (by /u/example)").unwrap())
///     .access_token("bearer-token")
///     .build()
///     .unwrap();
///
/// let client = RedditClient::new(&config);
/// let listing = client.get_json("/r/rust/hot", &[("limit".into(), "25".into())]).await?;
/// ```
#[derive(Debug)]
pub struct RedditClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://oauth.reddit.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Attempts per request; `1` disables retries.
    tries: u32,
}

// Verify RedditClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RedditClient>();
};

impl RedditClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &RedditConfig) -> Self {
        let base_uri = config
            .api_host()
            .map_or_else(|| DEFAULT_BASE_URI.to_string(), |host| host.as_ref().to_string());

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{} reddit-api-rust/{SDK_VERSION} (Rust {rust_version})",
            config.user_agent()
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
            tries: config.tries(),
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request and returns the parsed JSON body of a 2xx response.
    ///
    /// This is the executor contract consumed by the pagination engine:
    /// one call, one round trip from the caller's point of view. Retries for
    /// 429 and 500 happen inside this call when the configured `tries` budget
    /// allows them.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - The retry budget is exhausted (`MaxRetries`)
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, HttpError> {
        let response = self.get(path, query).await?;
        Ok(response.body)
    }

    /// Sends a GET request to the given path, returning the full response.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get_json`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpResponse, HttpError> {
        let url = if path.starts_with('/') {
            format!("{}{path}", self.base_uri)
        } else {
            format!("{}/{path}", self.base_uri)
        };

        tracing::debug!(%url, params = query.len(), "sending GET request");

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let mut req_builder = self.client.get(&url);
            for (key, value) in &self.default_headers {
                req_builder = req_builder.header(key, value);
            }
            if !query.is_empty() {
                req_builder = req_builder.query(query);
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text)
                    .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
            };

            let response = HttpResponse::new(code, headers, body);

            if let Some(limit) = response.rate_limit {
                tracing::debug!(
                    used = limit.used,
                    remaining = limit.remaining,
                    reset_seconds = limit.reset_seconds,
                    "rate limit state"
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = response.body.to_string();
            let should_retry = code == 429 || code == 500;

            if !should_retry || self.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    ratelimit_remaining: response.rate_limit.map(|l| l.remaining),
                }));
            }

            if attempt >= self.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: self.tries,
                    message,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                code,
                attempt,
                delay_secs = delay.as_secs_f64(),
                "retrying throttled request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` keyed by lowercase name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay for a throttled or failed response.
    ///
    /// For 429, `Retry-After` wins, then `X-Ratelimit-Reset`; 500 responses
    /// always wait the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> std::time::Duration {
        if status == 429 {
            if let Some(retry_after) = response.retry_after {
                return std::time::Duration::from_secs_f64(retry_after.max(0.0));
            }
            if let Some(limit) = response.rate_limit {
                return std::time::Duration::from_secs(limit.reset_seconds.min(60));
            }
        }
        std::time::Duration::from_secs(RETRY_WAIT_TIME)
    }
}
