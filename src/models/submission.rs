//! Submission (link) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FromThing, ParseError, ThingKind};

/// A submission (a link or self post) in a subreddit.
///
/// The field set is intentionally partial; Reddit sends dozens more fields
/// and unknown ones are ignored during deserialization.
///
/// # Fields
///
/// - `name` is the fullname (`t3_` + id) used wherever the API expects a
///   globally unique identifier, including pagination cursors.
/// - `url` points at the linked content for link posts and at the comments
///   page for self posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// The submission's id (without the kind prefix).
    pub id: String,
    /// The submission's fullname (e.g., `t3_abc123`).
    pub name: String,
    /// The title of the submission.
    pub title: String,
    /// The account that created the submission.
    #[serde(default)]
    pub author: Option<String>,
    /// The subreddit the submission was posted to.
    #[serde(default)]
    pub subreddit: Option<String>,
    /// Net score (upvotes minus downvotes).
    #[serde(default)]
    pub score: i64,
    /// Number of comments on the submission.
    #[serde(default)]
    pub num_comments: u64,
    /// The linked URL, or the comments page for self posts.
    #[serde(default)]
    pub url: Option<String>,
    /// Self-post body, empty for link posts.
    #[serde(default)]
    pub selftext: Option<String>,
    /// Whether the submission is a self post.
    #[serde(default)]
    pub is_self: bool,
    /// Whether the submission is marked NSFW.
    #[serde(default)]
    pub over_18: bool,
    /// When the submission was created.
    #[serde(with = "crate::models::epoch_seconds")]
    pub created_utc: DateTime<Utc>,
}

impl FromThing for Submission {
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError> {
        if kind != ThingKind::Link {
            return Err(ParseError::UnexpectedKind {
                kind: kind.prefix().to_string(),
            });
        }
        serde_json::from_value(data).map_err(|source| ParseError::Json {
            type_name: "Submission",
            source,
        })
    }
}
