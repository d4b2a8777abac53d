use super::*;
use argbind_parser::decompose;
use indexmap::IndexMap;
use serde_json::json;

fn data(value: serde_json::Value) -> DataSource {
    DataSource::from(value)
}

fn v(value: serde_json::Value) -> ResolvedValue {
    ResolvedValue::Value(value)
}

fn object<const N: usize>(members: [(&str, ResolvedValue); N]) -> ResolvedValue {
    ResolvedValue::Object(
        members
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<IndexMap<_, _>>(),
    )
}

#[test]
fn simple_present_and_absent() {
    let source = data(json!({ "a": "aA", "n": null }));
    assert_eq!(resolve(&decompose("a"), &source), v(json!("aA")));
    assert_eq!(resolve(&decompose("n = 1"), &source), v(json!(null)));
    assert_eq!(resolve(&decompose("b = 'dB'"), &source), ResolvedValue::Unresolved);
}

#[test]
fn pattern_without_default_always_recurses() {
    let source = data(json!({ "x": 1 }));
    assert_eq!(
        resolve(&decompose("[a, b]"), &source),
        ResolvedValue::Array(vec![ResolvedValue::Unresolved, ResolvedValue::Unresolved])
    );
    assert_eq!(
        resolve(&decompose("{a}"), &source),
        object([("a", ResolvedValue::Unresolved)])
    );
}

#[test]
fn defaulted_pattern_without_any_name_is_unresolved() {
    let source = data(json!({ "unrelated": true }));
    assert_eq!(
        resolve(&decompose("[a, [b = 'dB']] = ['x', ['y']]"), &source),
        ResolvedValue::Unresolved
    );
    assert_eq!(
        resolve(&decompose("{p, q = 'dQ'} = {}"), &source),
        ResolvedValue::Unresolved
    );
}

#[test]
fn defaulted_pattern_with_one_name_resolves_structurally() {
    let source = data(json!({ "a": "aA" }));
    assert_eq!(
        resolve(&decompose("[a, [b = 'dB']] = ['x', ['y']]"), &source),
        ResolvedValue::Array(vec![
            v(json!("aA")),
            ResolvedValue::Array(vec![ResolvedValue::Unresolved]),
        ])
    );
}

#[test]
fn presence_is_by_key_not_truthiness() {
    let source = data(json!({ "p": false }));
    assert_eq!(
        resolve(&decompose("{p, q} = {}"), &source),
        object([("p", v(json!(false))), ("q", ResolvedValue::Unresolved)])
    );
}

#[test]
fn renamed_member_looks_up_the_bound_name() {
    let source = data(json!({ "h": "aH", "i": "aI" }));
    assert_eq!(
        resolve(&decompose("{h: {i} = {}} = {}"), &source),
        object([("h", object([("i", v(json!("aI")))]))])
    );
    assert_eq!(
        resolve(&decompose("{h: alias}"), &source),
        object([("h", ResolvedValue::Unresolved)])
    );
}

#[test]
fn nested_defaulted_pattern_is_suppressed_independently() {
    let source = data(json!({ "a": 1 }));
    assert_eq!(
        resolve(&decompose("[a, [d, e] = ['dD', 'dE']]"), &source),
        ResolvedValue::Array(vec![v(json!(1)), ResolvedValue::Unresolved])
    );
}

#[test]
fn rest_elements_inside_patterns_are_left_to_the_callable() {
    let source = data(json!({ "a": 1, "others": 2, "tail": 3 }));
    assert_eq!(
        resolve(&decompose("[a, ...tail]"), &source),
        ResolvedValue::Array(vec![v(json!(1))])
    );
    assert_eq!(
        resolve(&decompose("{a, ...others}"), &source),
        object([("a", v(json!(1)))])
    );
}

#[test]
fn elisions_are_unresolved() {
    let source = data(json!({ "b": 2 }));
    assert_eq!(
        resolve(&decompose("[, b]"), &source),
        ResolvedValue::Array(vec![ResolvedValue::Unresolved, v(json!(2))])
    );
}

#[test]
fn quoted_keys_store_unquoted() {
    let source = data(json!({ "id": 7 }));
    assert_eq!(
        resolve(&decompose("{'user-id': id}"), &source),
        object([("user-id", v(json!(7)))])
    );
}
