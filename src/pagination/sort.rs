//! Sort and time-window vocabularies for listing endpoints.

use std::fmt;

/// How a listing is ordered by the server.
///
/// The default is [`Sort::Hot`]. Only [`Sort::Top`] and
/// [`Sort::Controversial`] are computed over a time window; for every other
/// sort the `t` query parameter is meaningless and the engine omits it.
///
/// # Example
///
/// ```rust
/// use reddit_api::Sort;
///
/// assert_eq!(Sort::Controversial.as_str(), "controversial");
/// assert!(Sort::Top.requires_time_window());
/// assert!(!Sort::New.requires_time_window());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Trending submissions (the front-page default).
    #[default]
    Hot,
    /// Newest first.
    New,
    /// Recently submitted posts that are gaining traction.
    Rising,
    /// Highest scoring over a time window.
    Top,
    /// Most controversial over a time window.
    Controversial,
}

impl Sort {
    /// The lower-case wire name, used both in paths and query parameters.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::New => "new",
            Self::Rising => "rising",
            Self::Top => "top",
            Self::Controversial => "controversial",
        }
    }

    /// Whether this sort is computed over a time window.
    ///
    /// Only `top` and `controversial` listings accept the `t` parameter.
    #[must_use]
    pub const fn requires_time_window(self) -> bool {
        matches!(self, Self::Top | Self::Controversial)
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The period window-dependent sorts are computed over.
///
/// Sent as the `t` query parameter, lower-case. The paginator default is
/// [`TimeWindow::Day`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// The past hour.
    Hour,
    /// The past 24 hours.
    #[default]
    Day,
    /// The past week.
    Week,
    /// The past month.
    Month,
    /// The past year.
    Year,
    /// All time.
    All,
}

impl TimeWindow {
    /// The lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering for search listings.
///
/// Search endpoints use their own `sort` query parameter with a vocabulary
/// distinct from [`Sort`]; it is owned by the search path strategy and does
/// not interact with the engine's sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchSort {
    /// Most relevant to the query (the search default).
    #[default]
    Relevance,
    /// Trending results.
    Hot,
    /// Highest scoring results.
    Top,
    /// Newest results.
    New,
    /// Most commented results.
    Comments,
}

impl SearchSort {
    /// The lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Hot => "hot",
            Self::Top => "top",
            Self::New => "new",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_wire_names_are_lower_case() {
        assert_eq!(Sort::Hot.as_str(), "hot");
        assert_eq!(Sort::New.as_str(), "new");
        assert_eq!(Sort::Rising.as_str(), "rising");
        assert_eq!(Sort::Top.as_str(), "top");
        assert_eq!(Sort::Controversial.as_str(), "controversial");
    }

    #[test]
    fn test_only_top_and_controversial_use_a_window() {
        assert!(Sort::Top.requires_time_window());
        assert!(Sort::Controversial.requires_time_window());
        assert!(!Sort::Hot.requires_time_window());
        assert!(!Sort::New.requires_time_window());
        assert!(!Sort::Rising.requires_time_window());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Sort::default(), Sort::Hot);
        assert_eq!(TimeWindow::default(), TimeWindow::Day);
        assert_eq!(SearchSort::default(), SearchSort::Relevance);
    }

    #[test]
    fn test_time_window_wire_names() {
        let names: Vec<&str> = [
            TimeWindow::Hour,
            TimeWindow::Day,
            TimeWindow::Week,
            TimeWindow::Month,
            TimeWindow::Year,
            TimeWindow::All,
        ]
        .iter()
        .map(|w| w.as_str())
        .collect();
        assert_eq!(names, vec!["hour", "day", "week", "month", "year", "all"]);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Sort::Top.to_string(), "top");
        assert_eq!(TimeWindow::All.to_string(), "all");
        assert_eq!(SearchSort::Comments.to_string(), "comments");
    }
}
