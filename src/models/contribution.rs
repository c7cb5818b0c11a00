//! Heterogeneous contribution items.
//!
//! User contribution listings (`/user/{username}/overview` and friends)
//! interleave submissions and comments in one stream. [`Contribution`] is
//! the tagged union representing one entry of such a stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Comment, FromThing, ParseError, Submission, ThingKind};

/// One entry of a mixed submission/comment listing.
///
/// The discriminator is the variant itself; use [`Contribution::kind`] when
/// the wire tag is needed, or the `as_*` accessors to get at the payload.
///
/// # Example
///
/// ```rust,ignore
/// let feed = paginator.accumulate_merged(Some(2)).await?;
/// for entry in &feed {
///     match entry {
///         Contribution::Submission(s) => println!("post: {}", s.title),
///         Contribution::Comment(c) => println!("comment: {}", c.body),
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Contribution {
    /// A submission entry (`t3`).
    Submission(Submission),
    /// A comment entry (`t1`).
    Comment(Comment),
}

impl Contribution {
    /// Returns the wire kind of the wrapped entry.
    #[must_use]
    pub const fn kind(&self) -> ThingKind {
        match self {
            Self::Submission(_) => ThingKind::Link,
            Self::Comment(_) => ThingKind::Comment,
        }
    }

    /// Returns the entry's fullname.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Submission(submission) => &submission.name,
            Self::Comment(comment) => &comment.name,
        }
    }

    /// Returns the wrapped submission, if this entry is one.
    #[must_use]
    pub const fn as_submission(&self) -> Option<&Submission> {
        match self {
            Self::Submission(submission) => Some(submission),
            Self::Comment(_) => None,
        }
    }

    /// Returns the wrapped comment, if this entry is one.
    #[must_use]
    pub const fn as_comment(&self) -> Option<&Comment> {
        match self {
            Self::Comment(comment) => Some(comment),
            Self::Submission(_) => None,
        }
    }
}

impl FromThing for Contribution {
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError> {
        match kind {
            ThingKind::Link => Submission::from_thing(kind, data).map(Self::Submission),
            ThingKind::Comment => Comment::from_thing(kind, data).map(Self::Comment),
            other => Err(ParseError::UnexpectedKind {
                kind: other.prefix().to_string(),
            }),
        }
    }
}
