//! The generic pagination engine.
//!
//! One engine drives every listing endpoint; the differences between
//! endpoint families live entirely in the injected [`PathStrategy`]. The
//! engine owns the traversal state, builds the query for each page, and
//! delegates the round trip to the [`RedditClient`] executor and the
//! [`Page::from_listing`] parser.

use crate::clients::RedditClient;
use crate::models::FromThing;
use crate::pagination::{Page, PaginationError, PathStrategy, Sort, TimeWindow, ValidationError};

/// Default number of items requested per page.
pub const DEFAULT_LIMIT: u32 = 25;
/// Largest page size the API honors.
pub const MAX_LIMIT: u32 = 100;

/// Where a paginator is in its lifecycle.
///
/// A single tri-state replaces the started/dirty flag pair so inconsistent
/// combinations cannot be represented. The full transition table:
///
/// | from   | `advance` ok        | setter   | `reset` |
/// |--------|---------------------|----------|---------|
/// | Fresh  | Active              | Fresh    | Fresh   |
/// | Active | Active              | Dirty    | Fresh   |
/// | Dirty  | error (`DirtyState`)| Dirty    | Fresh   |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    /// Never advanced.
    #[default]
    Fresh,
    /// Advanced at least once, parameters untouched since.
    Active,
    /// A parameter changed mid-iteration; `advance` refuses until `reset`.
    Dirty,
}

impl Phase {
    /// The transition taken when a setter mutates a parameter.
    const fn invalidated(self) -> Self {
        match self {
            Self::Active => Self::Dirty,
            other => other,
        }
    }
}

/// A resumable iterator over one listing endpoint.
///
/// Created through the constructors in [`crate::pagination::paginators`] or
/// directly from a [`PathStrategy`]. Each `advance` fetches one page; the
/// engine echoes the previous page's cursor back as the `after` parameter,
/// so traversal survives arbitrary pauses between calls.
///
/// # Parameter changes mid-iteration
///
/// Changing the sort, time window, or limit after the first page would
/// silently restart the listing server-side while the cursor still points
/// into the old ordering. The engine therefore marks itself dirty on any
/// setter call once iteration has started, and the next `advance` fails
/// with [`PaginationError::DirtyState`] until [`Paginator::reset`] is
/// called. Setter calls before the first page are plain configuration.
///
/// # Concurrency
///
/// `advance` takes `&mut self`: a paginator is a single traversal and is
/// not shareable across tasks. Run independent traversals with independent
/// paginators; they can share one [`RedditClient`].
///
/// # Example
///
/// ```rust,ignore
/// use reddit_api::pagination::paginators;
///
/// let mut posts = paginators::subreddit(&client, "rust");
/// posts.set_limit(50)?;
///
/// while posts.has_next() && posts.page_index() < 3 {
///     let page = posts.advance().await?;
///     for post in page.items() {
///         println!("{}", post.title);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Paginator<'a, T> {
    client: &'a RedditClient,
    strategy: PathStrategy,
    phase: Phase,
    sort: Sort,
    time_window: Option<TimeWindow>,
    limit: u32,
    current: Option<Page<T>>,
    page_index: u32,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a paginator with default parameters (sort `hot`, time window
    /// `day`, limit 25).
    #[must_use]
    pub const fn new(client: &'a RedditClient, strategy: PathStrategy) -> Self {
        Self {
            client,
            strategy,
            phase: Phase::Fresh,
            sort: Sort::Hot,
            time_window: Some(TimeWindow::Day),
            limit: DEFAULT_LIMIT,
            current: None,
            page_index: 0,
        }
    }

    /// Returns `true` if another `advance` can produce a page.
    ///
    /// Always `true` before the first advance: one call is always possible,
    /// whatever the server ends up returning. Afterwards, `true` while the
    /// current page carries a cursor.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current
            .as_ref()
            .map_or(true, |page| page.next_cursor().is_some())
    }

    /// Returns `true` once the paginator has fetched at least one page.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.phase != Phase::Fresh
    }

    /// The current sort.
    #[must_use]
    pub const fn sort(&self) -> Sort {
        self.sort
    }

    /// The current time window.
    ///
    /// Always reported, even when the current sort does not use a window
    /// and the `t` parameter is omitted from requests.
    #[must_use]
    pub const fn time_window(&self) -> Option<TimeWindow> {
        self.time_window
    }

    /// The current page size limit.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of pages fetched since creation or the last `reset`.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    /// The most recently fetched page, if any.
    #[must_use]
    pub const fn current_page(&self) -> Option<&Page<T>> {
        self.current.as_ref()
    }

    /// The path strategy driving this paginator.
    #[must_use]
    pub const fn strategy(&self) -> &PathStrategy {
        &self.strategy
    }

    /// Sets the sort. Marks the paginator dirty if iteration has started.
    pub fn set_sort(&mut self, sort: Sort) {
        self.sort = sort;
        self.invalidate();
    }

    /// Sets the time window. Marks the paginator dirty if iteration has
    /// started.
    ///
    /// The value is retained even for sorts that ignore it; it takes effect
    /// whenever the sort becomes window-dependent.
    pub fn set_time_window(&mut self, window: TimeWindow) {
        self.time_window = Some(window);
        self.invalidate();
    }

    /// Sets the page size limit.
    ///
    /// Marks the paginator dirty if iteration has started.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLimit`] when `limit` is outside
    /// `[1, 100]`; the previous value is left unchanged and the phase is
    /// untouched.
    pub fn set_limit(&mut self, limit: u32) -> Result<(), ValidationError> {
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ValidationError::InvalidLimit { limit });
        }
        self.limit = limit;
        self.invalidate();
        Ok(())
    }

    /// Returns the traversal to the Fresh phase.
    ///
    /// Clears the current page and page index and lifts a dirty state; the
    /// configured sort, time window, and limit are retained.
    pub fn reset(&mut self) {
        self.current = None;
        self.page_index = 0;
        self.phase = Phase::Fresh;
    }

    /// Builds the query parameters for the next request.
    fn build_query(&self, forward: bool) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(4);
        params.push(("limit".to_string(), self.limit.to_string()));

        if forward {
            if let Some(cursor) = self.current.as_ref().and_then(Page::next_cursor) {
                params.push(("after".to_string(), cursor.to_string()));
            }
        }

        // The t parameter only applies to window-dependent sorts.
        if self.sort.requires_time_window() {
            if let Some(window) = self.time_window {
                params.push(("t".to_string(), window.as_str().to_string()));
            }
        }

        params.extend(self.strategy.extra_params());
        params
    }

    fn invalidate(&mut self) {
        self.phase = self.phase.invalidated();
    }
}

impl<T: FromThing + Clone> Paginator<'_, T> {
    /// Fetches the next page.
    ///
    /// Equivalent to [`Self::advance_with`] with `forward = true`.
    ///
    /// # Errors
    ///
    /// See [`Self::advance_with`].
    pub async fn advance(&mut self) -> Result<Page<T>, PaginationError> {
        self.advance_with(true).await
    }

    /// Fetches a page, optionally without continuing from the cursor.
    ///
    /// With `forward = false` the `after` parameter is omitted, re-fetching
    /// the head of the listing without touching the configured parameters.
    ///
    /// On success the page becomes the current page, the page index is
    /// incremented, and the paginator is Active. On failure nothing is
    /// mutated: the same call can be retried, or the traversal resumed
    /// later, from exactly the state before the call.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::DirtyState`] if a setter was called since the
    ///   last advance; call [`Self::reset`] first.
    /// - [`PaginationError::Request`] for executor failures, unchanged.
    /// - [`PaginationError::Parse`] for malformed payloads, unchanged.
    pub async fn advance_with(&mut self, forward: bool) -> Result<Page<T>, PaginationError> {
        if self.phase == Phase::Dirty {
            return Err(PaginationError::DirtyState);
        }

        let path = self.strategy.path(self.sort);
        let query = self.build_query(forward);
        tracing::debug!(%path, page_index = self.page_index, "advancing paginator");

        let raw = self.client.get_json(&path, &query).await?;
        let page = Page::from_listing(raw)?;

        self.current = Some(page.clone());
        self.page_index += 1;
        self.phase = Phase::Active;
        Ok(page)
    }

    /// Fetches up to `max_pages` pages, in call order.
    ///
    /// Stops early when the listing is exhausted. The bound is on the
    /// paginator's absolute [`Self::page_index`], not on pages fetched by
    /// this call: after `accumulate(1)`, a second `accumulate(1)` returns
    /// no pages until `max_pages` is raised or the paginator is reset.
    ///
    /// # Partial failure
    ///
    /// The first error aborts the loop and is returned as-is; pages fetched
    /// by this call are discarded. The paginator itself keeps its progress,
    /// so the caller can continue from the failure point once the cause is
    /// resolved.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidMaxPages`] when `max_pages` is zero, plus
    /// everything [`Self::advance`] can return.
    pub async fn accumulate(&mut self, max_pages: u32) -> Result<Vec<Page<T>>, PaginationError> {
        if max_pages == 0 {
            return Err(ValidationError::InvalidMaxPages { max_pages }.into());
        }

        let mut pages = Vec::new();
        while self.has_next() && self.page_index < max_pages {
            pages.push(self.advance().await?);
        }
        Ok(pages)
    }

    /// Fetches pages and flattens their items into one sequence.
    ///
    /// Items appear in fetch order, preserving each page's internal order.
    /// `max_pages = None` keeps going until [`Self::has_next`] is false;
    /// `Some(n)` bounds the traversal like [`Self::accumulate`].
    ///
    /// Shares the accumulation loop and partial-failure policy of
    /// [`Self::accumulate`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidMaxPages`] when `max_pages` is `Some(0)`,
    /// plus everything [`Self::advance`] can return.
    pub async fn accumulate_merged(
        &mut self,
        max_pages: Option<u32>,
    ) -> Result<Vec<T>, PaginationError> {
        if max_pages == Some(0) {
            return Err(ValidationError::InvalidMaxPages { max_pages: 0 }.into());
        }

        let mut items = Vec::new();
        while self.has_next() && max_pages.map_or(true, |bound| self.page_index < bound) {
            let page = self.advance().await?;
            items.extend(page.into_items());
        }
        Ok(items)
    }
}
