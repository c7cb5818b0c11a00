//! HTTP response types for the Reddit API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! value parsed from Reddit's rate-limit headers.

use std::collections::HashMap;

/// Rate-limit information parsed from the `X-Ratelimit-*` response headers.
///
/// Reddit reports `X-Ratelimit-Used`, `X-Ratelimit-Remaining` and
/// `X-Ratelimit-Reset` (seconds until the current period ends) on every
/// authenticated response.
///
/// # Example
///
/// ```rust
/// use reddit_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-used".to_string(), vec!["3".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["597.0".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["240".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.reset_seconds, 240);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLimit {
    /// Requests used in the current period.
    pub used: f64,
    /// Requests remaining in the current period.
    pub remaining: f64,
    /// Seconds until the current period resets.
    pub reset_seconds: u64,
}

impl RateLimit {
    /// Parses the rate-limit headers, if all three are present and numeric.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let used = first("x-ratelimit-used")?.parse().ok()?;
        let remaining = first("x-ratelimit-remaining")?.parse().ok()?;
        // Reset is sometimes reported with a fractional part.
        let reset: f64 = first("x-ratelimit-reset")?.parse().ok()?;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Self {
            used,
            remaining,
            reset_seconds: reset.max(0.0).round() as u64,
        })
    }
}

/// An HTTP response from the Reddit API.
///
/// Contains the status code, headers, parsed JSON body, and the
/// Reddit-specific header values (rate limits, `Retry-After`).
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate-limit state, when the headers were present.
    pub rate_limit: Option<RateLimit>,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse` with automatic header parsing.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            rate_limit,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }
}
