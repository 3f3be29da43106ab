//! Blog records and the visibility rule applied when one is looked up.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BlogError, BlogResult, InvalidRecord};
use crate::id::BlogId;

/// An opaque blog record.
///
/// The service never interprets the fields; it only hands the object back
/// to callers exactly as the data layer produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogRecord(Map<String, Value>);

impl BlogRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for BlogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for BlogRecord {
    type Error = InvalidRecord;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = match value {
            Value::Object(fields) => return Ok(Self(fields)),
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
        };
        Err(InvalidRecord { kind })
    }
}

impl From<BlogRecord> for Value {
    fn from(record: BlogRecord) -> Self {
        Value::Object(record.0)
    }
}

/// Whether callers may view a stored record.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A stored record together with its identifier and visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogEntry {
    pub id: BlogId,
    #[serde(default)]
    pub visibility: Visibility,
    pub record: BlogRecord,
}

impl BlogEntry {
    pub fn public(id: BlogId, record: BlogRecord) -> Self {
        Self {
            id,
            visibility: Visibility::Public,
            record,
        }
    }

    pub fn private(id: BlogId, record: BlogRecord) -> Self {
        Self {
            id,
            visibility: Visibility::Private,
            record,
        }
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// The record as seen by a caller: private records exist but are denied.
    pub fn view(&self) -> BlogResult<&BlogRecord> {
        match self.visibility {
            Visibility::Public => Ok(&self.record),
            Visibility::Private => Err(BlogError::NotAuthorized),
        }
    }
}

/// Resolve a lookup against an optional entry.
///
/// Absent entries are `NotFound`; present ones follow [`BlogEntry::view`].
pub fn resolve(entry: Option<&BlogEntry>) -> BlogResult<BlogRecord> {
    entry
        .ok_or(BlogError::NotFound)
        .and_then(BlogEntry::view)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> BlogRecord {
        BlogRecord::try_from(v).unwrap()
    }

    fn id(s: &str) -> BlogId {
        BlogId::new(s).unwrap()
    }

    #[test]
    fn record_serializes_as_the_bare_object() {
        let r = record(json!({"title": "A", "tags": ["x"]}));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"title": "A", "tags": ["x"]})
        );
    }

    #[test]
    fn non_object_values_are_not_records() {
        assert_eq!(
            BlogRecord::try_from(json!([1, 2])).unwrap_err(),
            InvalidRecord { kind: "an array" }
        );
        assert!(BlogRecord::try_from(Value::Null).is_err());
        assert!(BlogRecord::try_from(json!("text")).is_err());
    }

    #[test]
    fn resolve_yields_exactly_one_outcome() {
        let public = BlogEntry::public(id("1"), record(json!({"title": "A"})));
        let private = BlogEntry::private(id("2"), record(json!({"title": "B"})));

        assert_eq!(resolve(Some(&public)), Ok(record(json!({"title": "A"}))));
        assert_eq!(resolve(Some(&private)), Err(BlogError::NotAuthorized));
        assert_eq!(resolve(None), Err(BlogError::NotFound));
    }

    #[test]
    fn entry_visibility_defaults_to_public() {
        let entry: BlogEntry =
            serde_json::from_value(json!({"id": "7", "record": {"title": "C"}})).unwrap();
        assert!(entry.is_public());

        let entry: BlogEntry = serde_json::from_value(
            json!({"id": "8", "visibility": "private", "record": {}}),
        )
        .unwrap();
        assert_eq!(entry.visibility, Visibility::Private);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a public entry always resolves to its own record.
            #[test]
            fn public_entry_resolves_to_its_record(
                raw_id in "[A-Za-z0-9_-]{1,16}",
                title in ".{0,32}",
            ) {
                let entry = BlogEntry::public(id(&raw_id), record(json!({"title": title})));
                prop_assert_eq!(resolve(Some(&entry)), Ok(entry.record.clone()));
            }

            /// Property: a private entry is never disclosed.
            #[test]
            fn private_entry_is_always_denied(raw_id in "[A-Za-z0-9_-]{1,16}") {
                let entry = BlogEntry::private(id(&raw_id), BlogRecord::default());
                prop_assert_eq!(resolve(Some(&entry)), Err(BlogError::NotAuthorized));
            }
        }
    }
}
