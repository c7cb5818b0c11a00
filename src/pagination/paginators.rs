//! Convenience constructors for the common listing endpoints.
//!
//! Each function pairs a [`PathStrategy`] with the item type the endpoint
//! yields and, for `where`-style listings, the accepted vocabulary. They are
//! thin: everything interesting happens in the engine.

use crate::clients::RedditClient;
use crate::models::{Contribution, Message, Submission, Subreddit};
use crate::pagination::{Paginator, PathStrategy, SearchSort, ValidationError};

/// `where` values accepted by user contribution listings.
pub const USER_CONTRIBUTION_WHERE: &[&str] = &[
    "overview",
    "gilded",
    "submitted",
    "liked",
    "disliked",
    "hidden",
    "saved",
    "comments",
];

/// `where` values accepted by the inbox listing.
pub const INBOX_WHERE: &[&str] = &["inbox", "unread", "messages", "sent"];

/// `where` values accepted by subreddit discovery listings.
pub const SUBREDDIT_STREAM_WHERE: &[&str] = &["popular", "new", "gold", "employee"];

/// `where` values accepted by the authenticated user's subreddit listing.
pub const MY_SUBREDDITS_WHERE: &[&str] = &["subscriber", "contributor", "moderator"];

/// Iterates the front page (`/{sort}`).
#[must_use]
pub fn front_page(client: &RedditClient) -> Paginator<'_, Submission> {
    Paginator::new(client, PathStrategy::front_page())
}

/// Iterates one subreddit (`/r/{subreddit}/{sort}`).
#[must_use]
pub fn subreddit<'a>(client: &'a RedditClient, subreddit: &str) -> Paginator<'a, Submission> {
    Paginator::new(client, PathStrategy::suffix(format!("/r/{subreddit}")))
}

/// Iterates several subreddits through one compound request per page
/// (`/r/a+b+c/{sort}`).
///
/// # Errors
///
/// Returns [`ValidationError::EmptySources`] if `subreddits` is empty.
pub fn subreddits<'a>(
    client: &'a RedditClient,
    subreddits: impl IntoIterator<Item = impl Into<String>>,
) -> Result<Paginator<'a, Submission>, ValidationError> {
    Ok(Paginator::new(client, PathStrategy::compound(subreddits)?))
}

/// Iterates a user's posts and comments (`/user/{username}/{where}`).
///
/// The stream interleaves submissions and comments, so items are
/// [`Contribution`] values.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidWhere`] if `where_value` is not one of
/// [`USER_CONTRIBUTION_WHERE`]. No request is sent in that case.
pub fn user_contributions<'a>(
    client: &'a RedditClient,
    username: &str,
    where_value: &str,
) -> Result<Paginator<'a, Contribution>, ValidationError> {
    let strategy = PathStrategy::where_value(
        format!("/user/{username}"),
        where_value,
        USER_CONTRIBUTION_WHERE,
    )?;
    Ok(Paginator::new(client, strategy))
}

/// Iterates the authenticated user's inbox (`/message/{where}`).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidWhere`] if `where_value` is not one of
/// [`INBOX_WHERE`].
pub fn inbox<'a>(
    client: &'a RedditClient,
    where_value: &str,
) -> Result<Paginator<'a, Message>, ValidationError> {
    let strategy = PathStrategy::where_value("/message", where_value, INBOX_WHERE)?;
    Ok(Paginator::new(client, strategy))
}

/// Iterates subreddit discovery listings (`/subreddits/{where}`).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidWhere`] if `where_value` is not one of
/// [`SUBREDDIT_STREAM_WHERE`].
pub fn subreddit_stream<'a>(
    client: &'a RedditClient,
    where_value: &str,
) -> Result<Paginator<'a, Subreddit>, ValidationError> {
    let strategy = PathStrategy::where_value("/subreddits", where_value, SUBREDDIT_STREAM_WHERE)?;
    Ok(Paginator::new(client, strategy))
}

/// Iterates the subreddits the authenticated user belongs to
/// (`/subreddits/mine/{where}`).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidWhere`] if `where_value` is not one of
/// [`MY_SUBREDDITS_WHERE`].
pub fn my_subreddits<'a>(
    client: &'a RedditClient,
    where_value: &str,
) -> Result<Paginator<'a, Subreddit>, ValidationError> {
    let strategy = PathStrategy::where_value("/subreddits/mine", where_value, MY_SUBREDDITS_WHERE)?;
    Ok(Paginator::new(client, strategy))
}

/// Searches submissions (`/search` or `/r/{subreddit}/search`).
#[must_use]
pub fn search<'a>(
    client: &'a RedditClient,
    query: &str,
    subreddit: Option<&str>,
) -> Paginator<'a, Submission> {
    Paginator::new(
        client,
        PathStrategy::search(query, subreddit.map(str::to_string)),
    )
}

/// Searches submissions with an explicit search ordering.
#[must_use]
pub fn search_sorted<'a>(
    client: &'a RedditClient,
    query: &str,
    subreddit: Option<&str>,
    sort: SearchSort,
) -> Paginator<'a, Submission> {
    Paginator::new(
        client,
        PathStrategy::search_sorted(query, subreddit.map(str::to_string), sort),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RedditConfig, UserAgent};
    use crate::pagination::Sort;

    fn test_client() -> RedditClient {
        let config = RedditConfig::builder()
            .user_agent(UserAgent::new("test-suite/0.1").unwrap())
            .build()
            .unwrap();
        RedditClient::new(&config)
    }

    #[test]
    fn test_front_page_paths() {
        let client = test_client();
        let paginator = front_page(&client);
        assert_eq!(paginator.strategy().path(Sort::Hot), "/hot");
    }

    #[test]
    fn test_subreddit_path() {
        let client = test_client();
        let paginator = subreddit(&client, "rust");
        assert_eq!(paginator.strategy().path(Sort::New), "/r/rust/new");
    }

    #[test]
    fn test_compound_rejects_empty_list() {
        let client = test_client();
        let result = subreddits(&client, Vec::<String>::new());
        assert!(matches!(result, Err(ValidationError::EmptySources)));
    }

    #[test]
    fn test_user_contributions_accepts_vocabulary() {
        let client = test_client();
        for where_value in USER_CONTRIBUTION_WHERE {
            let paginator = user_contributions(&client, "spez", where_value).unwrap();
            assert_eq!(
                paginator.strategy().path(Sort::Hot),
                format!("/user/spez/{where_value}")
            );
        }
    }

    #[test]
    fn test_user_contributions_rejects_unknown_where() {
        let client = test_client();
        let result = user_contributions(&client, "spez", "trophies");
        assert!(matches!(result, Err(ValidationError::InvalidWhere { .. })));
    }

    #[test]
    fn test_inbox_paths() {
        let client = test_client();
        let paginator = inbox(&client, "unread").unwrap();
        assert_eq!(paginator.strategy().path(Sort::Hot), "/message/unread");
    }

    #[test]
    fn test_subreddit_stream_and_mine() {
        let client = test_client();
        let stream = subreddit_stream(&client, "popular").unwrap();
        assert_eq!(stream.strategy().path(Sort::Hot), "/subreddits/popular");

        let mine = my_subreddits(&client, "moderator").unwrap();
        assert_eq!(mine.strategy().path(Sort::Hot), "/subreddits/mine/moderator");
    }

    #[test]
    fn test_search_scoped_and_unscoped() {
        let client = test_client();
        let global = search(&client, "lifetimes", None);
        assert_eq!(global.strategy().path(Sort::Hot), "/search");

        let scoped = search(&client, "lifetimes", Some("rust"));
        assert_eq!(scoped.strategy().path(Sort::Hot), "/r/rust/search");
    }
}
