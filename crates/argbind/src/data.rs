use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Why serialized data could not be used as a data source.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Keyed input values, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSource {
    entries: Map<String, Value>,
}

impl DataSource {
    pub fn new() -> Self {
        DataSource::default()
    }

    /// Decode serialized JSON text, which must hold an object.
    pub fn try_decode(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from_value(value)
    }

    pub fn try_from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(entries) => Ok(DataSource { entries }),
            other => Err(DecodeError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Like [`try_decode`](Self::try_decode), but a failure yields an empty source.
    pub fn decode(text: &str) -> Self {
        Self::try_decode(text).unwrap_or_else(|err| {
            debug!(%err, "data decoded as empty");
            DataSource::default()
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for DataSource {
    fn from(text: &str) -> Self {
        DataSource::decode(text)
    }
}

impl From<String> for DataSource {
    fn from(text: String) -> Self {
        DataSource::decode(&text)
    }
}

impl From<&String> for DataSource {
    fn from(text: &String) -> Self {
        DataSource::decode(text)
    }
}

impl From<Value> for DataSource {
    fn from(value: Value) -> Self {
        DataSource::try_from_value(value).unwrap_or_else(|err| {
            debug!(%err, "data decoded as empty");
            DataSource::default()
        })
    }
}

impl From<Map<String, Value>> for DataSource {
    fn from(entries: Map<String, Value>) -> Self {
        DataSource { entries }
    }
}

impl From<&DataSource> for DataSource {
    fn from(data: &DataSource) -> Self {
        data.clone()
    }
}

/// `None` is "no data at all".
impl<T: Into<DataSource>> From<Option<T>> for DataSource {
    fn from(data: Option<T>) -> Self {
        data.map(Into::into).unwrap_or_default()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DataSource {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        DataSource {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_object_text_in_order() {
        let data = DataSource::decode(r#"{"z": 1, "a": 2, "m": 3}"#);
        let keys: Vec<&str> = data.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn malformed_text_is_empty() {
        assert!(DataSource::decode("").is_empty());
        assert!(DataSource::decode("{not json").is_empty());
        assert!(matches!(
            DataSource::try_decode("{not json"),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn non_object_json_is_empty() {
        assert!(DataSource::from(json!([1, 2])).is_empty());
        assert!(DataSource::decode("\"text\"").is_empty());
        let err = DataSource::try_decode("42").unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, found a number");
    }

    #[test]
    fn none_is_empty() {
        assert!(DataSource::from(None::<Value>).is_empty());
        assert_eq!(DataSource::from(Some(json!({"a": 1}))).len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let data: DataSource = [("a", json!(1)), ("b", json!(null))].into_iter().collect();
        assert!(data.contains_key("b"));
        assert_eq!(data.get("a"), Some(&json!(1)));
        assert_eq!(data.get("c"), None);
    }
}
