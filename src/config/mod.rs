//! Configuration types for the Reddit API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with Reddit.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RedditConfig`]: The main configuration struct holding all SDK settings
//! - [`RedditConfigBuilder`]: A builder for constructing [`RedditConfig`] instances
//! - [`UserAgent`]: A validated User-Agent newtype (Reddit requires one)
//! - [`ApiHost`]: A validated base-URI override for proxies and tests
//!
//! # Example
//!
//! ```rust
//! use reddit_api::{RedditConfig, UserAgent};
//!
//! let config = RedditConfig::builder()
//!     .user_agent(UserAgent::new("linux:com.example.app:v0.1.0 (by /u/example)").unwrap())
//!     .access_token("bearer-token")
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiHost, UserAgent};

use crate::error::ConfigError;

/// Default number of attempts per request (no retries).
const DEFAULT_TRIES: u32 = 1;

/// Configuration for the Reddit API SDK.
///
/// Holds everything the HTTP client needs: the mandatory User-Agent, an
/// optional OAuth bearer token (token acquisition itself is out of scope
/// for this SDK), an optional API host override, and the retry budget.
///
/// # Thread Safety
///
/// `RedditConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks. There is no global state; every client
/// receives its configuration explicitly.
///
/// # Example
///
/// ```rust
/// use reddit_api::{RedditConfig, UserAgent};
///
/// let config = RedditConfig::builder()
///     .user_agent(UserAgent::new("test-suite/0.1").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 1);
/// assert!(config.access_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RedditConfig {
    user_agent: UserAgent,
    access_token: Option<String>,
    api_host: Option<ApiHost>,
    tries: u32,
}

impl RedditConfig {
    /// Creates a new builder for constructing a `RedditConfig`.
    #[must_use]
    pub fn builder() -> RedditConfigBuilder {
        RedditConfigBuilder::new()
    }

    /// Returns the User-Agent sent with every request.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Returns the OAuth access token, if configured.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&ApiHost> {
        self.api_host.as_ref()
    }

    /// Returns the number of attempts made per request.
    ///
    /// `1` means a single attempt with no retries. Values above `1` enable
    /// retries for 429 and 500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify RedditConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RedditConfig>();
};

/// Builder for constructing [`RedditConfig`] instances.
///
/// # Example
///
/// ```rust
/// use reddit_api::{ApiHost, RedditConfig, UserAgent};
///
/// let config = RedditConfig::builder()
///     .user_agent(UserAgent::new("test-suite/0.1").unwrap())
///     .api_host(ApiHost::new("http://127.0.0.1:8080").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RedditConfigBuilder {
    user_agent: Option<UserAgent>,
    access_token: Option<String>,
    api_host: Option<ApiHost>,
    tries: Option<u32>,
}

impl RedditConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Sets the OAuth access token used as a `Bearer` credential.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the API host override.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the number of attempts per request.
    ///
    /// Values of `0` are coerced to `1`; a request is always attempted once.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(if tries == 0 { 1 } else { tries });
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `user_agent` was
    /// never set.
    pub fn build(self) -> Result<RedditConfig, ConfigError> {
        let user_agent = self.user_agent.ok_or(ConfigError::MissingRequiredField {
            field: "user_agent",
        })?;

        Ok(RedditConfig {
            user_agent,
            access_token: self.access_token,
            api_host: self.api_host,
            tries: self.tries.unwrap_or(DEFAULT_TRIES),
        })
    }
}
