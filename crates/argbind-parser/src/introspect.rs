//! Parameter syntax introspection.
//!
//! Locates the parameter list inside the source text of a callable, as
//! produced by stringifying a JavaScript function. Supported forms:
//!
//! ```javascript
//! function name(a, b) {}          // also `async function`, `function*`
//! (a, b) => {}                    // also `async (a) => {}`
//! a => a                          // also `async a => a`
//! name(a, b) {}                   // method shorthand, with `static`/`get`/`set`/`*`
//! class C { constructor(a, b) {} }
//! ```

use crate::decompose;
use argbind_common::limits::MAX_SOURCE_SCAN_BYTES;
use argbind_scanner::{SyntaxKind, Token, matching_delimiter, strip_comments, tokenize};
use indexmap::IndexSet;
use tracing::trace;

pub use argbind_scanner::split_top_level;

/// Words that may precede a function or method name.
const PREFIX_KEYWORDS: &[&str] = &["async", "function", "static", "get", "set"];

enum ParameterListStart {
    /// Index of the `(` token.
    Parenthesized(usize),
    /// Index of the single identifier of `x => ...`.
    Bare(usize),
}

/// The raw text between the parentheses of a callable's parameter list, with
/// comments removed. Empty when `source` declares no parameters or is not
/// recognizable as a callable.
pub fn declared_parameter_text(source: &str) -> String {
    let source = scan_prefix(source);
    let tokens = tokenize(source);
    let Some(start) = parameter_list_start(source, &tokens) else {
        trace!("no parameter list found");
        return String::new();
    };

    match start {
        ParameterListStart::Bare(index) => tokens[index].text(source).to_string(),
        ParameterListStart::Parenthesized(index) => {
            let rest = &source[tokens[index].span.start as usize..];
            match matching_delimiter(rest) {
                Some(close) => strip_comments(&rest[1..close]).trim().to_string(),
                None => {
                    trace!("parameter list is never closed");
                    String::new()
                }
            }
        }
    }
}

/// Every identifier bound by `pattern_text`, in first-seen order.
pub fn leaf_names(pattern_text: &str) -> IndexSet<String> {
    decompose(pattern_text).leaf_names()
}

fn scan_prefix(source: &str) -> &str {
    if source.len() <= MAX_SOURCE_SCAN_BYTES {
        return source;
    }
    let mut end = MAX_SOURCE_SCAN_BYTES;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

fn parameter_list_start(source: &str, tokens: &[Token]) -> Option<ParameterListStart> {
    let kind = |i: usize| tokens.get(i).map(|t| t.kind);
    let text = |i: usize| tokens.get(i).map(|t| t.text(source));

    if text(0) == Some("class") {
        return constructor_start(source, tokens);
    }

    let mut i = 0;
    loop {
        match kind(i)? {
            SyntaxKind::OpenParenToken => return Some(ParameterListStart::Parenthesized(i)),
            SyntaxKind::AsteriskToken => i += 1,
            SyntaxKind::Identifier => {
                if kind(i + 1) == Some(SyntaxKind::EqualsGreaterThanToken) {
                    return Some(ParameterListStart::Bare(i));
                }
                let word = text(i)?;
                let followed_by_paren = kind(i + 1) == Some(SyntaxKind::OpenParenToken);
                if word == "function" || (PREFIX_KEYWORDS.contains(&word) && !followed_by_paren) {
                    i += 1;
                    continue;
                }
                // function or method name
                return followed_by_paren.then_some(ParameterListStart::Parenthesized(i + 1));
            }
            _ => return None,
        }
    }
}

/// `constructor(` directly inside the class body.
fn constructor_start(source: &str, tokens: &[Token]) -> Option<ParameterListStart> {
    let mut depth = 0u32;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            SyntaxKind::OpenBraceToken => depth += 1,
            SyntaxKind::CloseBraceToken => depth = depth.saturating_sub(1),
            SyntaxKind::Identifier
                if depth == 1
                    && token.text(source) == "constructor"
                    && tokens.get(i + 1).map(|t| t.kind) == Some(SyntaxKind::OpenParenToken) =>
            {
                return Some(ParameterListStart::Parenthesized(i + 1));
            }
            _ => {}
        }
    }
    None
}
