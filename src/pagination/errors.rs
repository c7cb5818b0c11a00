//! Error types for the pagination engine.

use thiserror::Error;

use crate::clients::HttpError;
use crate::models::ParseError;

/// Synchronous validation failures.
///
/// These are raised at the offending call (a setter, a constructor, or the
/// entry of an accumulation), never deferred to a later `advance`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The limit is outside the accepted `[1, 100]` range.
    #[error("invalid limit {limit}: must be between 1 and 100")]
    InvalidLimit {
        /// The rejected limit.
        limit: u32,
    },

    /// The `where` value is not in the paginator's accepted vocabulary.
    #[error("invalid where value '{value}': accepted values are {}", accepted.join(", "))]
    InvalidWhere {
        /// The rejected value.
        value: String,
        /// The accepted vocabulary for this paginator.
        accepted: &'static [&'static str],
    },

    /// `max_pages` must be greater than zero.
    #[error("invalid max_pages {max_pages}: must be greater than 0")]
    InvalidMaxPages {
        /// The rejected page bound.
        max_pages: u32,
    },

    /// A compound paginator needs at least one source.
    #[error("a compound paginator requires at least one source")]
    EmptySources,
}

/// Errors returned by `advance` and the accumulation helpers.
///
/// Executor and parser failures pass through unchanged; the engine adds only
/// the two failure modes it owns (validation and the dirty-state rule) and
/// never retries anything.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// A parameter failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `advance` was called after a setter changed parameters mid-iteration.
    ///
    /// Recoverable: call `reset()` and advance again from the first page.
    #[error("pagination parameters changed after iteration started; call reset() before advancing")]
    DirtyState,

    /// The executor failed (network error, non-2xx response, retries spent).
    #[error(transparent)]
    Request(#[from] HttpError),

    /// The response did not parse as a listing of the expected type.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_where_lists_accepted_values() {
        let error = ValidationError::InvalidWhere {
            value: "bogus".to_string(),
            accepted: &["new", "popular"],
        };
        let message = error.to_string();
        assert!(message.contains("'bogus'"));
        assert!(message.contains("new, popular"));
    }

    #[test]
    fn test_invalid_limit_names_the_bounds() {
        let error = ValidationError::InvalidLimit { limit: 101 };
        let message = error.to_string();
        assert!(message.contains("101"));
        assert!(message.contains("between 1 and 100"));
    }

    #[test]
    fn test_dirty_state_points_at_reset() {
        let error = PaginationError::DirtyState;
        assert!(error.to_string().contains("reset()"));
    }

    #[test]
    fn test_validation_error_converts_transparently() {
        let error: PaginationError = ValidationError::InvalidMaxPages { max_pages: 0 }.into();
        assert!(matches!(
            error,
            PaginationError::Validation(ValidationError::InvalidMaxPages { max_pages: 0 })
        ));
    }
}
