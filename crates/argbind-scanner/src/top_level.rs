//! Skip-aware structural queries over parameter-list text.
//!
//! "Top level" means bracket depth zero: not inside any `(...)`, `[...]` or
//! `{...}`. Strings, template literals, regular expressions and comments are
//! single tokens to the scanner, so their contents never count.

use crate::{ScannerState, SyntaxKind};
use std::borrow::Cow;

/// Split `text` at its top-level commas.
///
/// Segments are trimmed. A single trailing empty segment (a trailing comma)
/// is dropped; empty segments elsewhere are kept, so `"a,,b"` yields
/// `["a", "", "b"]`. Blank text yields no segments.
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    if text.trim().is_empty() {
        return segments;
    }

    let mut scanner = ScannerState::new(text);
    let mut depth = 0u32;
    let mut segment_start = 0usize;
    loop {
        match scanner.scan_significant() {
            SyntaxKind::EndOfFileToken => break,
            SyntaxKind::CommaToken if depth == 0 => {
                segments.push(text[segment_start..scanner.token_pos()].trim());
                segment_start = scanner.token_end();
            }
            kind if kind.is_open_delimiter() => depth += 1,
            kind if kind.is_close_delimiter() => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    let last = text[segment_start..].trim();
    if !last.is_empty() {
        segments.push(last);
    }
    segments
}

/// Byte offset of the first top-level token of `kind` in `text`.
pub fn find_top_level(text: &str, kind: SyntaxKind) -> Option<usize> {
    let mut scanner = ScannerState::new(text);
    let mut depth = 0u32;
    loop {
        match scanner.scan_significant() {
            SyntaxKind::EndOfFileToken => return None,
            found if found == kind && depth == 0 => return Some(scanner.token_pos()),
            open if open.is_open_delimiter() => depth += 1,
            close if close.is_close_delimiter() => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Byte offset of the delimiter closing the one that opens `text`.
///
/// `text` must start (after trivia) with `(`, `[` or `{`. Returns `None` when
/// it does not, when the delimiter is never closed, or when a closing token
/// does not match the innermost open one.
pub fn matching_delimiter(text: &str) -> Option<usize> {
    let mut scanner = ScannerState::new(text);
    let mut expected = Vec::new();
    loop {
        let kind = scanner.scan_significant();
        if let Some(close) = kind.closing_delimiter() {
            expected.push(close);
        } else if kind.is_close_delimiter() {
            if expected.pop() != Some(kind) {
                return None;
            }
            if expected.is_empty() {
                return Some(scanner.token_pos());
            }
        } else if kind == SyntaxKind::EndOfFileToken || expected.is_empty() {
            return None;
        }
    }
}

/// Replace every comment in `text` with a single space.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    let mut scanner = ScannerState::new(text);
    let mut stripped: Option<String> = None;
    let mut copied_to = 0usize;
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        if kind.is_comment() {
            let out = stripped.get_or_insert_with(|| String::with_capacity(text.len()));
            out.push_str(&text[copied_to..scanner.token_pos()]);
            out.push(' ');
            copied_to = scanner.token_end();
        }
    }
    match stripped {
        Some(mut out) => {
            out.push_str(&text[copied_to..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
