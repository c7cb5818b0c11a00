//! Thing kinds and the parser contract for listing children.
//!
//! Every object in a Reddit listing is wrapped in a "thing" envelope:
//! `{"kind": "t3", "data": {...}}`. [`ThingKind`] maps the kind prefixes and
//! [`FromThing`] is the contract a type implements to be produced from one
//! of those envelopes.

use serde_json::Value;

use crate::models::ParseError;

/// The kind prefixes Reddit uses to tag things on the wire.
///
/// # Example
///
/// ```rust
/// use reddit_api::models::ThingKind;
///
/// assert_eq!(ThingKind::Link.prefix(), "t3");
/// assert_eq!(ThingKind::from_prefix("t1"), Some(ThingKind::Comment));
/// assert_eq!(ThingKind::from_prefix("t9"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThingKind {
    /// A comment (`t1`).
    Comment,
    /// An account (`t2`).
    Account,
    /// A link/submission (`t3`).
    Link,
    /// A private message (`t4`).
    Message,
    /// A subreddit (`t5`).
    Subreddit,
}

impl ThingKind {
    /// Returns the wire prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Comment => "t1",
            Self::Account => "t2",
            Self::Link => "t3",
            Self::Message => "t4",
            Self::Subreddit => "t5",
        }
    }

    /// Parses a wire prefix into a kind.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "t1" => Some(Self::Comment),
            "t2" => Some(Self::Account),
            "t3" => Some(Self::Link),
            "t4" => Some(Self::Message),
            "t5" => Some(Self::Subreddit),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A type that can be produced from one listing child.
///
/// Implementors receive the child's [`ThingKind`] and its `data` node.
/// Single-kind types reject every other kind with
/// [`ParseError::UnexpectedKind`]; [`crate::models::Contribution`] accepts
/// two kinds and dispatches on the tag.
pub trait FromThing: Sized {
    /// Builds a value from one `{"kind", "data"}` child.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedKind`] when the kind cannot be
    /// represented by `Self`, or [`ParseError::Json`] when the data node
    /// does not deserialize.
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError>;
}
