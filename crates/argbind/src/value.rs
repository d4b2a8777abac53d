use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// The value resolved for one argument slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResolvedValue {
    /// Nothing was supplied; the callable's own default applies.
    #[default]
    Unresolved,
    /// A value copied verbatim from the data source.
    Value(Value),
    /// The result of an array pattern.
    Array(Vec<ResolvedValue>),
    /// The result of an object pattern, keyed by pattern member key.
    Object(IndexMap<String, ResolvedValue>),
}

impl ResolvedValue {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, ResolvedValue::Unresolved)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ResolvedValue::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Convert to JSON. JSON has no `undefined`, so `Unresolved` becomes `null`.
    pub fn into_json(self) -> Value {
        match self {
            ResolvedValue::Unresolved => Value::Null,
            ResolvedValue::Value(value) => value,
            ResolvedValue::Array(items) => {
                Value::Array(items.into_iter().map(ResolvedValue::into_json).collect())
            }
            ResolvedValue::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for ResolvedValue {
    fn from(value: Value) -> Self {
        ResolvedValue::Value(value)
    }
}

impl Serialize for ResolvedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedValue::Unresolved => serializer.serialize_none(),
            ResolvedValue::Value(value) => value.serialize(serializer),
            ResolvedValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ResolvedValue::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
