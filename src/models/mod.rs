//! Wire models for the Reddit API.
//!
//! This module provides the typed models produced by the parser side of the
//! SDK:
//!
//! - [`ThingKind`]: the `t1`..`t5` kind prefixes
//! - [`FromThing`]: the contract for building a model from one listing child
//! - [`Submission`], [`Comment`], [`Subreddit`], [`Message`]: partial
//!   resource models (full field coverage is a non-goal)
//! - [`Contribution`]: tagged union for mixed submission/comment listings
//! - [`ParseError`]: parse failure taxonomy
//!
//! Unknown JSON fields are ignored everywhere; Reddit's payloads carry far
//! more than these models track.

mod comment;
mod contribution;
mod errors;
mod message;
mod submission;
mod subreddit;
mod thing;

pub use comment::Comment;
pub use contribution::Contribution;
pub use errors::ParseError;
pub use message::Message;
pub use submission::Submission;
pub use subreddit::Subreddit;
pub use thing::{FromThing, ThingKind};

/// Serde helper for Reddit's `created_utc` fields, which arrive as epoch
/// seconds with a fractional part.
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[allow(clippy::cast_precision_loss)]
        serializer.serialize_f64(value.timestamp() as f64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        #[allow(clippy::cast_possible_truncation)]
        DateTime::from_timestamp(secs as i64, 0)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamp {
        #[serde(with = "super::epoch_seconds")]
        created_utc: DateTime<Utc>,
    }

    #[test]
    fn test_epoch_seconds_round_trip() {
        let stamp: Stamp = serde_json::from_str(r#"{"created_utc":1686000000.5}"#).unwrap();
        assert_eq!(stamp.created_utc.timestamp(), 1_686_000_000);

        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(json, r#"{"created_utc":1686000000.0}"#);
    }

    #[test]
    fn test_epoch_seconds_accepts_integers() {
        let stamp: Stamp = serde_json::from_str(r#"{"created_utc":1686000000}"#).unwrap();
        assert_eq!(stamp.created_utc.timestamp(), 1_686_000_000);
    }
}
