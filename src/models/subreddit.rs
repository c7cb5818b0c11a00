//! Subreddit model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FromThing, ParseError, ThingKind};

/// A subreddit.
///
/// Returned by subreddit discovery listings (`/subreddits/new`,
/// `/subreddits/popular`). The field set is intentionally partial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subreddit {
    /// The subreddit's id (without the kind prefix).
    pub id: String,
    /// The subreddit's fullname (e.g., `t5_2qh0y`).
    pub name: String,
    /// The display name used in URLs (e.g., `rust`).
    pub display_name: String,
    /// The subreddit's title.
    #[serde(default)]
    pub title: Option<String>,
    /// Public description shown in search results.
    #[serde(default)]
    pub public_description: Option<String>,
    /// Number of subscribers, absent for quarantined listings.
    #[serde(default)]
    pub subscribers: Option<u64>,
    /// Whether the subreddit is marked NSFW.
    #[serde(default)]
    pub over18: bool,
    /// When the subreddit was created.
    #[serde(with = "crate::models::epoch_seconds")]
    pub created_utc: DateTime<Utc>,
}

impl FromThing for Subreddit {
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError> {
        if kind != ThingKind::Subreddit {
            return Err(ParseError::UnexpectedKind {
                kind: kind.prefix().to_string(),
            });
        }
        serde_json::from_value(data).map_err(|source| ParseError::Json {
            type_name: "Subreddit",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_thing_parses_subreddit_kind() {
        let data = json!({
            "id": "2qh0y",
            "name": "t5_2qh0y",
            "display_name": "rust",
            "title": "The Rust Programming Language",
            "subscribers": 280000,
            "created_utc": 1201242956.0
        });
        let subreddit = Subreddit::from_thing(ThingKind::Subreddit, data).unwrap();
        assert_eq!(subreddit.display_name, "rust");
        assert_eq!(subreddit.subscribers, Some(280_000));
    }

    #[test]
    fn test_from_thing_rejects_other_kinds() {
        let result = Subreddit::from_thing(ThingKind::Message, json!({}));
        assert!(matches!(result, Err(ParseError::UnexpectedKind { kind }) if kind == "t4"));
    }
}
