//! Pattern decomposition.
//!
//! A parameter segment is classified by its leading characters, split at its
//! top-level `=` into pattern and default text, and, for destructuring
//! patterns, unpacked and decomposed member by member. The recursion follows
//! the nesting of the pattern itself, so the whole tree is built in one pass.

use crate::unpack::{PatternError, try_unpack};
use crate::{ObjectPatternMember, ParameterDescriptor, ParameterKind, PatternDelimiter};
use argbind_common::limits::MAX_PATTERN_DEPTH;
use argbind_scanner::char_codes::is_identifier_text;
use argbind_scanner::{SyntaxKind, find_top_level, split_top_level};
use tracing::debug;

/// Decompose one top-level parameter segment.
pub fn decompose(segment: &str) -> ParameterDescriptor {
    decompose_at_depth(segment, 0)
}

fn decompose_at_depth(segment: &str, depth: u32) -> ParameterDescriptor {
    let segment = segment.trim();
    if let Some(name) = segment.strip_prefix("...") {
        let name = name.trim();
        let kind = ParameterKind::Variadic {
            name: name.to_string(),
            target: rest_target(name, depth),
        };
        return ParameterDescriptor::new(segment, kind, None);
    }

    let (pattern, default_value_text) = split_default(segment);
    let kind = match PatternDelimiter::of(pattern) {
        Some(delimiter @ PatternDelimiter::Bracket) => ParameterKind::ArrayPattern {
            elements: member_segments(pattern, delimiter, depth)
                .into_iter()
                .map(|element| decompose_at_depth(element, depth + 1))
                .collect(),
        },
        Some(delimiter @ PatternDelimiter::Brace) => ParameterKind::ObjectPattern {
            members: member_segments(pattern, delimiter, depth)
                .into_iter()
                .filter_map(|member| decompose_member(member, depth + 1))
                .collect(),
        },
        None if pattern.is_empty() => ParameterKind::Elision,
        None => ParameterKind::Simple {
            name: pattern.to_string(),
        },
    };
    ParameterDescriptor::new(pattern, kind, default_value_text)
}

/// Decomposition of a rest element's target, unless it is a plain identifier.
/// The target counts as one more level of nesting.
fn rest_target(name: &str, depth: u32) -> Option<Box<ParameterDescriptor>> {
    if is_identifier_text(name) {
        return None;
    }
    if depth >= MAX_PATTERN_DEPTH {
        let err = PatternError::TooDeep {
            limit: MAX_PATTERN_DEPTH,
        };
        debug!(%err, "rest target left undecomposed");
        return None;
    }
    Some(Box::new(decompose_at_depth(name, depth + 1)))
}

/// Split `segment` at its top-level assignment into pattern and default text.
fn split_default(segment: &str) -> (&str, Option<String>) {
    match find_top_level(segment, SyntaxKind::EqualsToken) {
        Some(at) => (
            segment[..at].trim(),
            Some(segment[at + 1..].trim().to_string()),
        ),
        None => (segment, None),
    }
}

/// Member segments of a pattern. Malformed or over-deep patterns have none.
fn member_segments(pattern: &str, delimiter: PatternDelimiter, depth: u32) -> Vec<&str> {
    if depth >= MAX_PATTERN_DEPTH {
        let err = PatternError::TooDeep {
            limit: MAX_PATTERN_DEPTH,
        };
        debug!(%err, "pattern decomposed as empty");
        return Vec::new();
    }
    match try_unpack(pattern, delimiter) {
        Ok(inner) => split_top_level(inner),
        Err(err) => {
            debug!(%err, pattern, "pattern decomposed as empty");
            Vec::new()
        }
    }
}

/// Decompose one member of an object pattern: `key: value`, `name = default`,
/// `'quoted key': value` or `...rest`.
fn decompose_member(segment: &str, depth: u32) -> Option<ObjectPatternMember> {
    let segment = segment.trim();
    if segment.is_empty() {
        return None;
    }
    if segment.starts_with("...") {
        return Some(ObjectPatternMember {
            key: segment.to_string(),
            value: decompose_at_depth(segment, depth),
        });
    }

    // A colon after the top-level `=` belongs to the default (`a = b ? c : d`).
    let colon = find_top_level(segment, SyntaxKind::ColonToken);
    let equals = find_top_level(segment, SyntaxKind::EqualsToken);
    match colon {
        Some(at) if equals.is_none_or(|eq| at < eq) => Some(ObjectPatternMember {
            key: unquote_key(segment[..at].trim()).to_string(),
            value: decompose_at_depth(&segment[at + 1..], depth),
        }),
        _ => {
            let value = decompose_at_depth(segment, depth);
            let key = value.name().unwrap_or(&value.text).to_string();
            Some(ObjectPatternMember { key, value })
        }
    }
}

fn unquote_key(key: &str) -> &str {
    let bytes = key.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'\'' | b'"')), Some(&close)) if key.len() >= 2 && open == close => {
            &key[1..key.len() - 1]
        }
        _ => key,
    }
}

#[cfg(test)]
#[path = "tests/decompose_tests.rs"]
mod tests;
