//! Cursor-based pagination over Reddit listing endpoints.
//!
//! Reddit exposes every listing the same way: a request returns up to
//! `limit` items plus an opaque `after` cursor, and the next page is fetched
//! by echoing that cursor back. This module turns that contract into a
//! uniform, resumable page iterator:
//!
//! - [`Page`]: one fetched batch plus its cursor
//! - [`Paginator`]: the generic advance/reset/accumulate engine
//! - [`PathStrategy`]: data-driven per-endpoint path and parameter shapes
//! - [`Sort`], [`TimeWindow`], [`SearchSort`]: the fixed parameter
//!   vocabularies
//! - [`paginators`]: ready-made constructors for the common endpoints
//! - [`PaginationError`], [`ValidationError`]: the failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use reddit_api::pagination::paginators;
//! use reddit_api::{Sort, TimeWindow};
//!
//! let mut top_week = paginators::subreddit(&client, "rust");
//! top_week.set_sort(Sort::Top);
//! top_week.set_time_window(TimeWindow::Week);
//!
//! let posts = top_week.accumulate_merged(Some(3)).await?;
//! for post in &posts {
//!     println!("{:>5}  {}", post.score, post.title);
//! }
//! ```

mod engine;
mod errors;
mod page;
mod sort;
mod strategy;

pub mod paginators;

pub use engine::{Paginator, DEFAULT_LIMIT, MAX_LIMIT};
pub use errors::{PaginationError, ValidationError};
pub use page::Page;
pub use sort::{SearchSort, Sort, TimeWindow};
pub use strategy::PathStrategy;
