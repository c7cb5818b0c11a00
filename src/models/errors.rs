//! Parse errors for Reddit wire models.

use thiserror::Error;

/// Errors raised while turning a raw JSON response into typed models.
///
/// These surface through the pagination engine unchanged; the engine never
/// retries or rewrites a parse failure.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response was not a listing envelope (`"kind": "Listing"`).
    #[error("expected a Listing envelope, found kind '{kind}'")]
    NotAListing {
        /// The kind value that was found instead.
        kind: String,
    },

    /// A required field of the envelope was missing or of the wrong type.
    #[error("listing response is missing the '{field}' field")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A child carried a thing kind the target type cannot represent.
    #[error("unexpected thing kind '{kind}' in listing children")]
    UnexpectedKind {
        /// The kind prefix that was found (e.g., "t5").
        kind: String,
    },

    /// A child's data node failed to deserialize into the target type.
    #[error("failed to deserialize {type_name} data: {source}")]
    Json {
        /// The name of the type being deserialized.
        type_name: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}
