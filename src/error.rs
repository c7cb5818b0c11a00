//! Error types for SDK configuration.
//!
//! This module contains the error type used by configuration constructors
//! and the config builder.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use reddit_api::{ConfigError, UserAgent};
//!
//! let result = UserAgent::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUserAgent)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// User agent cannot be empty.
    ///
    /// Reddit rejects requests without a descriptive User-Agent, so the SDK
    /// refuses to construct a configuration without one.
    #[error("User agent cannot be empty. Reddit requires a descriptive User-Agent, e.g. 'linux:com.example.myapp:v0.1.0 (by /u/username)'.")]
    EmptyUserAgent,

    /// User agent contains characters that are not valid in an HTTP header.
    #[error("Invalid user agent '{user_agent}'. It must not contain control characters.")]
    InvalidUserAgent {
        /// The invalid user agent that was provided.
        user_agent: String,
    },

    /// API host is invalid.
    #[error("Invalid API host '{host}'. Please provide a URL with scheme (e.g., 'https://oauth.reddit.com').")]
    InvalidApiHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_user_agent_error_message() {
        let error = ConfigError::EmptyUserAgent;
        let message = error.to_string();
        assert!(message.contains("User agent cannot be empty"));
        assert!(message.contains("descriptive User-Agent"));
    }

    #[test]
    fn test_invalid_api_host_error_message() {
        let error = ConfigError::InvalidApiHost {
            host: "not-a-url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not-a-url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "user_agent",
        };
        let message = error.to_string();
        assert!(message.contains("user_agent"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUserAgent;
        let _: &dyn std::error::Error = &error;
    }
}
