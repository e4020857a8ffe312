//! Raw document model for the static reference file.
//!
//! The on-disk shape is a fixed 3-key JSON object: `seats`, `primary_bodies`,
//! and `persons`, each a mapping keyed by name. Sections deserialize into
//! [`RawTable`]s that preserve document order, so loading can reject
//! duplicate keys with a typed error instead of letting the last entry win.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A JSON-object section kept as ordered `(key, value)` entries.
///
/// Plain map containers silently collapse duplicate keys; keeping the raw
/// entries lets [`crate::StaticDataSet::from_document`] treat a repeat as
/// an integrity error.
#[derive(Debug, Clone)]
pub struct RawTable<V>(pub Vec<(String, V)>);

impl<V> Default for RawTable<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V> Deserialize<'de> for RawTable<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for TableVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = RawTable<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map keyed by name")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(RawTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

/// The whole static reference document. Missing sections are empty tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStaticDoc {
    #[serde(default)]
    pub seats: RawTable<RawSeat>,
    #[serde(default)]
    pub primary_bodies: RawTable<RawBody>,
    #[serde(default)]
    pub persons: RawTable<RawPerson>,
}

/// Seat fields; the seat name is the table key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeat {
    pub electoral_area: Option<String>,
    pub image_uri: Option<String>,
}

/// Primary-body fields; the body name is the table key.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBody {
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub external_source_id: Option<String>,
}

/// Person fields; the person name is the table key. `seat` is a seat name
/// resolved against the `seats` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPerson {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub picture_uri: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub external_source_id: Option<String>,
    pub seat: Option<String>,
    #[serde(default)]
    pub roles: Vec<RawRole>,
}

/// One historical role term. Timestamps are POSIX epoch seconds;
/// `end_datetime` is absent while the term is ongoing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRole {
    pub title: String,
    pub body: RawBodyRef,
    pub start_datetime: i64,
    pub end_datetime: Option<i64>,
    pub external_source_id: Option<String>,
}

/// A role's body: either the name of a primary body, or an inline object
/// defining a non-primary body such as a committee.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawBodyRef {
    Name(String),
    Inline(RawInlineBody),
}

/// Inline non-primary body definition inside a role.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInlineBody {
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub external_source_id: Option<String>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_preserves_duplicate_entries() {
        let json = r#"{"Position 1": {}, "Position 2": {}, "Position 1": {}}"#;
        let table: RawTable<RawSeat> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = table.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Position 1", "Position 2", "Position 1"]);
    }

    #[test]
    fn body_ref_accepts_name_or_inline_object() {
        let by_name: RawBodyRef = serde_json::from_str(r#""City Council""#).unwrap();
        assert!(matches!(by_name, RawBodyRef::Name(ref n) if n == "City Council"));

        let inline: RawBodyRef =
            serde_json::from_str(r#"{"name": "Transportation Committee"}"#).unwrap();
        match inline {
            RawBodyRef::Inline(body) => {
                assert_eq!(body.name, "Transportation Committee");
                assert!(body.is_active);
            }
            RawBodyRef::Name(_) => panic!("expected inline body"),
        }
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc: RawStaticDoc = serde_json::from_str("{}").unwrap();
        assert!(doc.seats.0.is_empty());
        assert!(doc.primary_bodies.0.is_empty());
        assert!(doc.persons.0.is_empty());
    }
}
