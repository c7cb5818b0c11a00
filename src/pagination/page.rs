//! One fetched batch of items plus its continuation cursor.

use serde_json::Value;

use crate::models::{FromThing, ParseError, ThingKind};

/// An immutable page of listing items.
///
/// Produced by parsing one listing envelope. The cursor is opaque: the SDK
/// never synthesizes or inspects it, only echoes it back verbatim as the
/// `after` parameter of the next request.
///
/// # Invariants
///
/// - Item order is the server's order and is preserved.
/// - `next_cursor()` is `None` **iff** this is the final page. An empty
///   `items()` slice does **not** imply the stream is exhausted; Reddit can
///   return empty intermediate pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page from already-parsed parts.
    #[must_use]
    pub const fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// The items of this page, in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The opaque cursor of the page after this one, absent on the final page.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page carries no items.
    ///
    /// Note that an empty page is not necessarily the last one; check
    /// [`Self::next_cursor`] for that.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: FromThing> Page<T> {
    /// Parses a listing envelope into a page.
    ///
    /// Expects the shape Reddit uses for every listing endpoint:
    ///
    /// ```json
    /// {
    ///   "kind": "Listing",
    ///   "data": {
    ///     "children": [ {"kind": "t3", "data": {...}}, ... ],
    ///     "after": "t3_abc123"
    ///   }
    /// }
    /// ```
    ///
    /// `after` may be a string, `null`, or absent; the latter two both mean
    /// the final page.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the envelope shape is wrong, a child
    /// carries an unknown or unrepresentable kind, or a child's data fails
    /// to deserialize.
    pub fn from_listing(value: Value) -> Result<Self, ParseError> {
        let kind = value
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(ParseError::MissingField { field: "kind" })?;
        if kind != "Listing" {
            return Err(ParseError::NotAListing {
                kind: kind.to_string(),
            });
        }

        let data = value
            .get("data")
            .ok_or(ParseError::MissingField { field: "data" })?;
        let children = data
            .get("children")
            .and_then(Value::as_array)
            .ok_or(ParseError::MissingField { field: "children" })?;

        let mut items = Vec::with_capacity(children.len());
        for child in children {
            let prefix = child
                .get("kind")
                .and_then(Value::as_str)
                .ok_or(ParseError::MissingField { field: "kind" })?;
            let child_kind =
                ThingKind::from_prefix(prefix).ok_or_else(|| ParseError::UnexpectedKind {
                    kind: prefix.to_string(),
                })?;
            let child_data = child
                .get("data")
                .cloned()
                .ok_or(ParseError::MissingField { field: "data" })?;
            items.push(T::from_thing(child_kind, child_data)?);
        }

        let next_cursor = data
            .get("after")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { items, next_cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;
    use serde_json::json;

    fn child(name: &str) -> Value {
        json!({
            "kind": "t3",
            "data": {
                "id": name.trim_start_matches("t3_"),
                "name": name,
                "title": format!("title for {name}"),
                "created_utc": 1686000000.0
            }
        })
    }

    fn listing(children: Vec<Value>, after: Value) -> Value {
        json!({
            "kind": "Listing",
            "data": { "children": children, "after": after }
        })
    }

    #[test]
    fn test_parses_items_in_server_order() {
        let value = listing(vec![child("t3_a"), child("t3_b")], json!("t3_b"));
        let page: Page<Submission> = Page::from_listing(value).unwrap();

        let names: Vec<&str> = page.items().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["t3_a", "t3_b"]);
        assert_eq!(page.next_cursor(), Some("t3_b"));
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_null_after_means_final_page() {
        let value = listing(vec![child("t3_a")], json!(null));
        let page: Page<Submission> = Page::from_listing(value).unwrap();
        assert!(page.next_cursor().is_none());
    }

    #[test]
    fn test_absent_after_means_final_page() {
        let value = json!({
            "kind": "Listing",
            "data": { "children": [] }
        });
        let page: Page<Submission> = Page::from_listing(value).unwrap();
        assert!(page.next_cursor().is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn test_empty_page_can_still_have_a_cursor() {
        let value = listing(vec![], json!("t3_keepgoing"));
        let page: Page<Submission> = Page::from_listing(value).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.next_cursor(), Some("t3_keepgoing"));
    }

    #[test]
    fn test_non_listing_envelope_is_rejected() {
        let value = json!({ "kind": "t3", "data": {} });
        let result: Result<Page<Submission>, _> = Page::from_listing(value);
        assert!(matches!(result, Err(ParseError::NotAListing { kind }) if kind == "t3"));
    }

    #[test]
    fn test_missing_children_is_rejected() {
        let value = json!({ "kind": "Listing", "data": {} });
        let result: Result<Page<Submission>, _> = Page::from_listing(value);
        assert!(matches!(
            result,
            Err(ParseError::MissingField { field: "children" })
        ));
    }

    #[test]
    fn test_unknown_child_kind_is_rejected() {
        let value = listing(vec![json!({ "kind": "t9", "data": {} })], json!(null));
        let result: Result<Page<Submission>, _> = Page::from_listing(value);
        assert!(matches!(result, Err(ParseError::UnexpectedKind { kind }) if kind == "t9"));
    }

    #[test]
    fn test_into_items_consumes_in_order() {
        let value = listing(vec![child("t3_a"), child("t3_b")], json!(null));
        let page: Page<Submission> = Page::from_listing(value).unwrap();
        let items = page.into_items();
        assert_eq!(items[0].name, "t3_a");
        assert_eq!(items[1].name, "t3_b");
    }
}
