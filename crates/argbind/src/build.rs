//! Argument list construction for a whole parameter declaration.

use crate::{DataSource, ResolvedValue, resolve};
use argbind_parser::ParameterList;
use tracing::trace;

/// Build the positional arguments for parameter-list text (the part between
/// the parentheses) from `data`.
pub fn build(declaration: &str, data: impl Into<DataSource>) -> Vec<ResolvedValue> {
    let data = data.into();
    if data.is_empty() {
        return Vec::new();
    }
    build_with(&ParameterList::parse(declaration), &data)
}

/// Build the positional arguments for an already-parsed parameter list.
///
/// Explicit parameters come first, in declaration order. Every data entry
/// whose key is not bound by an explicit parameter follows, in data order;
/// those are what a trailing `...rest` parameter collects.
pub fn build_with(parameters: &ParameterList, data: &DataSource) -> Vec<ResolvedValue> {
    if parameters.is_empty() || data.is_empty() {
        return Vec::new();
    }

    let mut arguments: Vec<ResolvedValue> = parameters
        .explicit()
        .map(|parameter| {
            let value = resolve(parameter, data);
            trace!(
                parameter = %parameter.text,
                unresolved = value.is_unresolved(),
                "resolved slot"
            );
            value
        })
        .collect();

    let explicit_len = arguments.len();
    arguments.extend(
        data.iter()
            .filter(|(key, _)| !parameters.expects(key))
            .map(|(_, value)| ResolvedValue::Value(value.clone())),
    );
    trace!(
        explicit = explicit_len,
        extra = arguments.len() - explicit_len,
        "built arguments"
    );
    arguments
}
