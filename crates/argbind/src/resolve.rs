//! Argument value resolution.
//!
//! Resolution walks one parameter descriptor against the flat data source.
//! Every name is looked up at the top level of the data, however deeply it
//! is nested in the pattern; the pattern only decides the *shape* of the
//! resolved value. Renamed object members (`{ key: name }`) therefore look up
//! `name`, and store the result under `key`.

use crate::{DataSource, ResolvedValue};
use argbind_parser::{ParameterDescriptor, ParameterKind};
use tracing::debug;

/// Resolve `descriptor` against `data`.
///
/// A defaulted pattern none of whose bound names appears in `data` resolves
/// to [`ResolvedValue::Unresolved`] as a whole, so the callable's default for
/// the pattern applies. If any bound name is present the pattern is resolved
/// member by member, and only the missing members are unresolved.
pub fn resolve(descriptor: &ParameterDescriptor, data: &DataSource) -> ResolvedValue {
    match &descriptor.kind {
        ParameterKind::Simple { name } => data
            .get(name)
            .cloned()
            .map_or(ResolvedValue::Unresolved, ResolvedValue::Value),
        ParameterKind::Variadic { .. } | ParameterKind::Elision => ResolvedValue::Unresolved,
        ParameterKind::ArrayPattern { elements } => {
            if defers_to_default(descriptor, data) {
                return ResolvedValue::Unresolved;
            }
            // A nested rest element takes whatever follows; supplying nothing
            // leaves it empty.
            ResolvedValue::Array(
                elements
                    .iter()
                    .filter(|element| !element.is_variadic())
                    .map(|element| resolve(element, data))
                    .collect(),
            )
        }
        ParameterKind::ObjectPattern { members } => {
            if defers_to_default(descriptor, data) {
                return ResolvedValue::Unresolved;
            }
            ResolvedValue::Object(
                members
                    .iter()
                    .filter(|member| !member.value.is_variadic())
                    .map(|member| (member.key.clone(), resolve(&member.value, data)))
                    .collect(),
            )
        }
    }
}

/// Whether a defaulted pattern binds no name present in `data`.
fn defers_to_default(descriptor: &ParameterDescriptor, data: &DataSource) -> bool {
    if !descriptor.has_default() {
        return false;
    }
    let present = descriptor
        .leaf_names()
        .iter()
        .any(|name| data.contains_key(name));
    if !present {
        debug!(pattern = %descriptor.text, "no bound name present, deferring to default");
    }
    !present
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
