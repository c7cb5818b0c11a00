//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated User-Agent string.
///
/// Reddit requires every client to identify itself with a unique, descriptive
/// User-Agent and will throttle or block generic ones. This newtype ensures
/// the value is non-empty and header-safe.
///
/// # Example
///
/// ```rust
/// use reddit_api::UserAgent;
///
/// let ua = UserAgent::new("linux:com.example.myapp:v0.1.0 (by /u/example)").unwrap();
/// assert!(ua.as_ref().starts_with("linux:"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAgent(String);

impl UserAgent {
    /// Creates a new validated User-Agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserAgent`] if the value is empty, or
    /// [`ConfigError::InvalidUserAgent`] if it contains control characters.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, ConfigError> {
        let user_agent = user_agent.into();
        if user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        if user_agent.chars().any(char::is_control) {
            return Err(ConfigError::InvalidUserAgent { user_agent });
        }
        Ok(Self(user_agent))
    }
}

impl AsRef<str> for UserAgent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API host URL.
///
/// By default the SDK talks to `https://oauth.reddit.com`. An `ApiHost`
/// overrides that base URI, which is useful for proxies and for pointing
/// the client at a local mock server in tests.
///
/// # Example
///
/// ```rust
/// use reddit_api::ApiHost;
///
/// let host = ApiHost::new("https://proxy.example.com").unwrap();
/// assert_eq!(host.as_ref(), "https://proxy.example.com");
///
/// // Trailing slashes are trimmed so paths can be appended directly.
/// let host = ApiHost::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiHost(String);

impl ApiHost {
    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the value does not start
    /// with `http://` or `https://`, or carries nothing after the scheme.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let trimmed = host.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match rest {
            Some(authority) if !authority.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(ConfigError::InvalidApiHost { host }),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
