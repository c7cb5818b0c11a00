//! Comment model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FromThing, ParseError, ThingKind};

/// A comment on a submission.
///
/// Appears in user contribution listings alongside submissions; the field
/// set is intentionally partial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// The comment's id (without the kind prefix).
    pub id: String,
    /// The comment's fullname (e.g., `t1_def456`).
    pub name: String,
    /// The account that wrote the comment.
    #[serde(default)]
    pub author: Option<String>,
    /// The comment body as markdown.
    pub body: String,
    /// The subreddit the comment was posted in.
    #[serde(default)]
    pub subreddit: Option<String>,
    /// Fullname of the submission the comment belongs to.
    #[serde(default)]
    pub link_id: Option<String>,
    /// Net score (upvotes minus downvotes).
    #[serde(default)]
    pub score: i64,
    /// When the comment was created.
    #[serde(with = "crate::models::epoch_seconds")]
    pub created_utc: DateTime<Utc>,
}

impl FromThing for Comment {
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError> {
        if kind != ThingKind::Comment {
            return Err(ParseError::UnexpectedKind {
                kind: kind.prefix().to_string(),
            });
        }
        serde_json::from_value(data).map_err(|source| ParseError::Json {
            type_name: "Comment",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_thing_parses_comment_kind() {
        let data = json!({
            "id": "def456",
            "name": "t1_def456",
            "author": "someone",
            "body": "Great post!",
            "link_id": "t3_abc123",
            "score": 12,
            "created_utc": 1686000100.0
        });
        let comment = Comment::from_thing(ThingKind::Comment, data).unwrap();
        assert_eq!(comment.name, "t1_def456");
        assert_eq!(comment.link_id.as_deref(), Some("t3_abc123"));
    }

    #[test]
    fn test_from_thing_rejects_other_kinds() {
        let result = Comment::from_thing(ThingKind::Link, json!({}));
        assert!(matches!(result, Err(ParseError::UnexpectedKind { kind }) if kind == "t3"));
    }
}
