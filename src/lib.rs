//! # Reddit API Rust SDK
//!
//! A Rust SDK for the Reddit REST API, centered on resumable, cursor-based
//! pagination over listing endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`RedditConfig`] and [`RedditConfigBuilder`]
//! - A validated [`UserAgent`] newtype (Reddit requires a descriptive one)
//! - An async HTTP client with retry logic and rate-limit handling
//! - A generic pagination engine ([`Paginator`]) with data-driven path
//!   strategies for the different listing endpoint families
//! - Partial wire models for submissions, comments, subreddits, and
//!   messages, plus a tagged [`models::Contribution`] union for mixed feeds
//!
//! OAuth token acquisition is out of scope: bring your own bearer token and
//! pass it through the configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use reddit_api::{RedditConfig, UserAgent};
//!
//! let config = RedditConfig::builder()
//!     .user_agent(UserAgent::new("linux:com.example.myapp:v0.1.0 (by /u/example)").unwrap())
//!     .access_token("your-bearer-token")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Paging Through a Listing
//!
//! ```rust,ignore
//! use reddit_api::pagination::paginators;
//! use reddit_api::{RedditClient, Sort, TimeWindow};
//!
//! let client = RedditClient::new(&config);
//!
//! // Top posts of the week, three pages of 50.
//! let mut posts = paginators::subreddit(&client, "rust");
//! posts.set_sort(Sort::Top);
//! posts.set_time_window(TimeWindow::Week);
//! posts.set_limit(50)?;
//!
//! for page in posts.accumulate(3).await? {
//!     for post in page.items() {
//!         println!("{:>5}  {}", post.score, post.title);
//!     }
//! }
//! ```
//!
//! ## Resuming and Reconfiguring
//!
//! A paginator is resumable: each advance picks up at the cursor returned
//! by the previous page, however much time passed in between. Changing the
//! sort, time window, or limit mid-iteration would silently tear that
//! cursor out from under the listing, so the engine refuses to advance
//! after a parameter change until [`Paginator::reset`] is called:
//!
//! ```rust,ignore
//! let first = posts.advance().await?;
//! posts.set_sort(Sort::Controversial);
//! assert!(posts.advance().await.is_err()); // DirtyState
//!
//! posts.reset();
//! let restarted = posts.advance().await?; // back at page one, new sort
//! ```
//!
//! ## Mixed Feeds
//!
//! ```rust,ignore
//! use reddit_api::models::Contribution;
//! use reddit_api::pagination::paginators;
//!
//! let mut overview = paginators::user_contributions(&client, "spez", "overview")?;
//! for entry in overview.accumulate_merged(Some(2)).await? {
//!     match entry {
//!         Contribution::Submission(s) => println!("post: {}", s.title),
//!         Contribution::Comment(c) => println!("comment: {}", c.body),
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Limits, `where` values, and page bounds are
//!   validated at the offending call, never deferred to the next request
//! - **One engine, many endpoints**: endpoint families differ only in the
//!   injected path strategy, not in type hierarchies
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;

// Re-export public types at crate root for convenience
pub use config::{ApiHost, RedditConfig, RedditConfigBuilder, UserAgent};
pub use error::ConfigError;

pub use clients::{
    HttpError, HttpResponse, HttpResponseError, MaxHttpRetriesExceededError, RateLimit,
    RedditClient,
};

pub use pagination::{
    Page, PaginationError, Paginator, PathStrategy, SearchSort, Sort, TimeWindow, ValidationError,
};
