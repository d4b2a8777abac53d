//! JavaScript parameter binding, for checking what a callable observes when
//! invoked with prepared arguments.
//!
//! Default values are evaluated only when they are literals (strings,
//! numbers, booleans, `null`, arrays and objects of literals), which is all
//! the fixtures use.

#![allow(dead_code)]

use argbind::{ParameterDescriptor, ParameterKind, ParameterList, ResolvedValue};
use argbind_parser::{PatternDelimiter, unpack};
use argbind_scanner::{SyntaxKind, find_top_level, split_top_level};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Bound parameter names; `None` is `undefined`.
pub type Bindings = IndexMap<String, Option<Value>>;

/// A value as seen by the callee, where `undefined` is distinct from `null`.
#[derive(Clone, Debug)]
enum JsValue {
    Undefined,
    Json(Value),
    Array(Vec<JsValue>),
    Object(IndexMap<String, JsValue>),
}

impl From<ResolvedValue> for JsValue {
    fn from(value: ResolvedValue) -> Self {
        match value {
            ResolvedValue::Unresolved => JsValue::Undefined,
            ResolvedValue::Value(value) => JsValue::Json(value),
            ResolvedValue::Array(items) => {
                JsValue::Array(items.into_iter().map(JsValue::from).collect())
            }
            ResolvedValue::Object(members) => JsValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, JsValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl JsValue {
    fn element(&self, index: usize) -> JsValue {
        match self {
            JsValue::Array(items) => items.get(index).cloned().unwrap_or(JsValue::Undefined),
            JsValue::Json(Value::Array(items)) => items
                .get(index)
                .cloned()
                .map_or(JsValue::Undefined, JsValue::Json),
            _ => JsValue::Undefined,
        }
    }

    fn rest(&self, from: usize) -> JsValue {
        match self {
            JsValue::Array(items) => JsValue::Array(items.iter().skip(from).cloned().collect()),
            JsValue::Json(Value::Array(items)) => {
                JsValue::Json(Value::Array(items.iter().skip(from).cloned().collect()))
            }
            _ => JsValue::Array(Vec::new()),
        }
    }

    fn property(&self, key: &str) -> JsValue {
        match self {
            JsValue::Object(members) => members.get(key).cloned().unwrap_or(JsValue::Undefined),
            JsValue::Json(Value::Object(members)) => members
                .get(key)
                .cloned()
                .map_or(JsValue::Undefined, JsValue::Json),
            _ => JsValue::Undefined,
        }
    }

    fn into_binding(self) -> Option<Value> {
        match self {
            JsValue::Undefined => None,
            JsValue::Json(value) => Some(value),
            JsValue::Array(items) => Some(Value::Array(
                items
                    .into_iter()
                    .map(|item| item.into_binding().unwrap_or(Value::Null))
                    .collect(),
            )),
            JsValue::Object(members) => Some(Value::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, v.into_binding().unwrap_or(Value::Null)))
                    .collect(),
            )),
        }
    }
}

/// Bind `arguments` to `parameters` the way a JavaScript call would.
pub fn bind_arguments(parameters: &ParameterList, arguments: Vec<ResolvedValue>) -> Bindings {
    let arguments = JsValue::Array(arguments.into_iter().map(JsValue::from).collect());
    let mut bindings = Bindings::new();
    bind_elements(parameters.parameters(), &arguments, &mut bindings);
    bindings
}

fn bind_elements(elements: &[ParameterDescriptor], list: &JsValue, bindings: &mut Bindings) {
    for (index, element) in elements.iter().enumerate() {
        match &element.kind {
            ParameterKind::Variadic { name, .. } => {
                bindings.insert(name.clone(), list.rest(index).into_binding());
            }
            _ => bind(element, list.element(index), bindings),
        }
    }
}

fn bind(descriptor: &ParameterDescriptor, value: JsValue, bindings: &mut Bindings) {
    let value = match (value, &descriptor.default_value_text) {
        (JsValue::Undefined, Some(default)) => JsValue::Json(eval_literal(default)),
        (value, _) => value,
    };
    match &descriptor.kind {
        ParameterKind::Simple { name } => {
            bindings.insert(name.clone(), value.into_binding());
        }
        ParameterKind::ArrayPattern { elements } => bind_elements(elements, &value, bindings),
        ParameterKind::ObjectPattern { members } => {
            for member in members.iter().filter(|m| !m.value.is_variadic()) {
                bind(&member.value, value.property(&member.key), bindings);
            }
        }
        ParameterKind::Variadic { .. } | ParameterKind::Elision => {}
    }
}

/// Evaluate a literal default-value expression.
pub fn eval_literal(text: &str) -> Value {
    let text = text.trim();
    match text.as_bytes().first() {
        Some(b'\'' | b'"') => Value::String(text[1..text.len() - 1].to_string()),
        Some(b'[') => Value::Array(
            split_top_level(unpack(text, PatternDelimiter::Bracket))
                .into_iter()
                .map(|element| {
                    if element.is_empty() {
                        Value::Null
                    } else {
                        eval_literal(element)
                    }
                })
                .collect(),
        ),
        Some(b'{') => {
            let mut object = Map::new();
            for member in split_top_level(unpack(text, PatternDelimiter::Brace)) {
                let colon = find_top_level(member, SyntaxKind::ColonToken)
                    .unwrap_or_else(|| panic!("unsupported object member `{member}`"));
                let key = member[..colon].trim().trim_matches(['\'', '"']);
                object.insert(key.to_string(), eval_literal(&member[colon + 1..]));
            }
            Value::Object(object)
        }
        _ => serde_json::from_str(text)
            .unwrap_or_else(|_| panic!("unsupported default value `{text}`")),
    }
}
