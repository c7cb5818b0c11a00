//! HTTP client infrastructure for the Reddit API SDK.
//!
//! This module provides the executor side of the SDK:
//!
//! - [`RedditClient`]: async HTTP client with retry and rate-limit handling
//! - [`HttpResponse`] and [`RateLimit`]: parsed response values
//! - [`HttpError`]: unified executor error type
//!
//! The pagination engine treats this module as a collaborator: it hands over
//! a path and query parameters, and receives raw JSON (or an [`HttpError`])
//! back. Retries and backoff live here, never in the engine.

mod errors;
mod http_response;
mod reddit_client;

pub use errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
pub use http_response::{HttpResponse, RateLimit};
pub use reddit_client::{RedditClient, RETRY_WAIT_TIME, SDK_VERSION};
