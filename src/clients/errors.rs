//! HTTP-specific error types for the Reddit API SDK.
//!
//! This module contains error types for executor-level failures: non-2xx
//! responses, retry exhaustion, and network errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_api::clients::HttpError;
//!
//! match client.get_json("/r/rust/hot", &[]).await {
//!     Ok(body) => println!("listing: {body}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// Contains the status code and the error body Reddit returned, plus the
/// rate-limit state at the time of failure when the headers were present.
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, serialized for display.
    pub message: String,
    /// Requests remaining in the current rate-limit period, if reported.
    pub ratelimit_remaining: Option<f64>,
}

/// Error returned when the retry budget has been exhausted.
///
/// Raised when a request keeps failing with 429 or 500 responses after all
/// configured attempts have been made.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last response was HTTP {code}: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of attempts that were made.
    pub tries: u32,
    /// The last response body, serialized for display.
    pub message: String,
}

/// Unified error type for all executor-level failures.
///
/// The pagination engine never retries or rewrites these; they surface to
/// the caller of `advance`/`accumulate` unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response from the API.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
