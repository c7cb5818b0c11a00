//! Data-driven path strategies for listing endpoints.
//!
//! Reddit's listing endpoints share one pagination contract but differ in
//! how the request path is assembled and which extra query parameters they
//! take. Each [`PathStrategy`] variant captures one of those shapes as
//! plain data; the engine asks it for a path and extra parameters on every
//! advance. Variant-specific behavior is configuration, not inheritance.

use crate::pagination::{SearchSort, Sort, ValidationError};

/// Joins compound sources into one path token so a compound listing is
/// always a single request per page.
const COMPOUND_SEPARATOR: char = '+';

/// The path and extra-parameter shape of one listing endpoint family.
///
/// Construct through the provided constructors; `where`-style and compound
/// strategies validate their inputs there, so an invalid paginator can never
/// send a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathStrategy {
    /// Sort-driven listings: `{prefix}{sort}{extension}`.
    ///
    /// Covers the front page (`/hot`) and subreddit listings
    /// (`/r/rust/top`).
    Suffix {
        /// Path prefix, always ending in `/`.
        prefix: String,
        /// Optional extension appended after the sort name.
        extension: String,
    },

    /// Fixed-vocabulary listings: `{prefix}{value}{postfix}`.
    ///
    /// Covers templated sub-resources such as `/user/{name}/submitted` and
    /// `/subreddits/popular`. The `value` was validated at construction.
    Where {
        /// Path prefix, always ending in `/`.
        prefix: String,
        /// The validated `where` value.
        value: String,
        /// Optional postfix appended after the value.
        postfix: String,
    },

    /// Multi-source listings: `/r/a+b+c/{sort}`.
    ///
    /// Iterates several subreddits through one joined path token, issuing
    /// exactly one request per page rather than merging independent
    /// paginators client-side.
    Compound {
        /// The subreddit names to interleave; never empty.
        sources: Vec<String>,
    },

    /// Search listings: `/search` or `/r/{subreddit}/search`.
    ///
    /// Carries its own `sort` vocabulary plus the `q` and `restrict_sr`
    /// parameters; the engine's sort does not appear on the wire.
    Search {
        /// Restrict the search to one subreddit.
        subreddit: Option<String>,
        /// The free-text query.
        query: String,
        /// Search-specific result ordering.
        sort: SearchSort,
    },
}

impl PathStrategy {
    /// Creates a suffix strategy for the front page (`/{sort}`).
    #[must_use]
    pub fn front_page() -> Self {
        Self::Suffix {
            prefix: "/".to_string(),
            extension: String::new(),
        }
    }

    /// Creates a suffix strategy rooted at the given prefix.
    ///
    /// The prefix is normalized to end with `/` so the sort name always
    /// forms its own path segment.
    #[must_use]
    pub fn suffix(prefix: impl Into<String>) -> Self {
        Self::Suffix {
            prefix: Self::with_trailing_slash(prefix.into()),
            extension: String::new(),
        }
    }

    /// Creates a `where` strategy, validating `value` against `accepted`.
    ///
    /// Validation happens here, at construction: a paginator built from a
    /// bad `where` value fails immediately and never issues a request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWhere`] naming the accepted set if
    /// `value` is not one of `accepted`.
    pub fn where_value(
        prefix: impl Into<String>,
        value: impl Into<String>,
        accepted: &'static [&'static str],
    ) -> Result<Self, ValidationError> {
        let value = value.into().to_lowercase();
        if !accepted.contains(&value.as_str()) {
            return Err(ValidationError::InvalidWhere { value, accepted });
        }
        Ok(Self::Where {
            prefix: Self::with_trailing_slash(prefix.into()),
            value,
            postfix: String::new(),
        })
    }

    /// Creates a compound strategy over several subreddits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptySources`] if `sources` is empty.
    pub fn compound(
        sources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        if sources.is_empty() {
            return Err(ValidationError::EmptySources);
        }
        Ok(Self::Compound { sources })
    }

    /// Creates a search strategy with the default relevance ordering.
    #[must_use]
    pub fn search(query: impl Into<String>, subreddit: Option<String>) -> Self {
        Self::Search {
            subreddit,
            query: query.into(),
            sort: SearchSort::default(),
        }
    }

    /// Creates a search strategy with an explicit result ordering.
    #[must_use]
    pub fn search_sorted(
        query: impl Into<String>,
        subreddit: Option<String>,
        sort: SearchSort,
    ) -> Self {
        Self::Search {
            subreddit,
            query: query.into(),
            sort,
        }
    }

    /// Builds the request path for the given engine sort.
    ///
    /// `Where` and `Search` strategies ignore the engine sort; their
    /// ordering is fixed by the path or owned by the strategy.
    #[must_use]
    pub fn path(&self, sort: Sort) -> String {
        match self {
            Self::Suffix { prefix, extension } => format!("{prefix}{sort}{extension}"),
            Self::Where {
                prefix,
                value,
                postfix,
            } => format!("{prefix}{value}{postfix}"),
            Self::Compound { sources } => {
                let mut joined = String::new();
                for (i, source) in sources.iter().enumerate() {
                    if i > 0 {
                        joined.push(COMPOUND_SEPARATOR);
                    }
                    joined.push_str(source);
                }
                format!("/r/{joined}/{sort}")
            }
            Self::Search { subreddit, .. } => subreddit
                .as_ref()
                .map_or_else(|| "/search".to_string(), |sr| format!("/r/{sr}/search")),
        }
    }

    /// Extra query parameters this strategy contributes to every request.
    #[must_use]
    pub fn extra_params(&self) -> Vec<(String, String)> {
        match self {
            Self::Suffix { .. } | Self::Where { .. } | Self::Compound { .. } => Vec::new(),
            Self::Search {
                subreddit,
                query,
                sort,
            } => vec![
                ("q".to_string(), query.clone()),
                (
                    "restrict_sr".to_string(),
                    if subreddit.is_some() { "on" } else { "off" }.to_string(),
                ),
                ("sort".to_string(), sort.as_str().to_string()),
            ],
        }
    }

    fn with_trailing_slash(mut prefix: String) -> String {
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        prefix
    }
}
