//! Private message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{FromThing, ParseError, ThingKind};

/// A private message or comment reply from the inbox.
///
/// Inbox listings mix direct messages and comment replies; `was_comment`
/// distinguishes them. The field set is intentionally partial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// The message's id (without the kind prefix).
    pub id: String,
    /// The message's fullname (e.g., `t4_xyz789`).
    pub name: String,
    /// The sending account, absent for system messages.
    #[serde(default)]
    pub author: Option<String>,
    /// The receiving account.
    #[serde(default)]
    pub dest: Option<String>,
    /// The subject line.
    pub subject: String,
    /// The message body as markdown.
    pub body: String,
    /// Whether this entry is a comment reply rather than a direct message.
    #[serde(default)]
    pub was_comment: bool,
    /// Whether the message is unread.
    #[serde(default)]
    pub new: bool,
    /// When the message was sent.
    #[serde(with = "crate::models::epoch_seconds")]
    pub created_utc: DateTime<Utc>,
}

impl FromThing for Message {
    fn from_thing(kind: ThingKind, data: Value) -> Result<Self, ParseError> {
        if kind != ThingKind::Message {
            return Err(ParseError::UnexpectedKind {
                kind: kind.prefix().to_string(),
            });
        }
        serde_json::from_value(data).map_err(|source| ParseError::Json {
            type_name: "Message",
            source,
        })
    }
}
