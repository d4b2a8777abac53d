//! Pattern unpacking: strip the outer `[ ]` or `{ }` of a destructuring pattern.

use crate::PatternDelimiter;
use argbind_scanner::matching_delimiter;
use thiserror::Error;
use tracing::debug;

/// Pattern text that does not have the expected structure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("expected pattern to start with `{expected}`, found `{found}`")]
    MissingDelimiter { expected: char, found: String },
    #[error("`{open}` is never closed")]
    Unbalanced { open: char },
    #[error("pattern nesting exceeds {limit} levels")]
    TooDeep { limit: u32 },
}

/// Return the interior of `pattern` between its outermost delimiter pair.
///
/// Anything after the matching close delimiter is ignored.
pub fn try_unpack(pattern: &str, delimiter: PatternDelimiter) -> Result<&str, PatternError> {
    let pattern = pattern.trim();
    if !pattern.starts_with(delimiter.open()) {
        return Err(PatternError::MissingDelimiter {
            expected: delimiter.open(),
            found: pattern.chars().take(16).collect(),
        });
    }
    let close = matching_delimiter(pattern).ok_or(PatternError::Unbalanced {
        open: delimiter.open(),
    })?;
    Ok(&pattern[1..close])
}

/// Like [`try_unpack`], but a structural mismatch yields empty text.
pub fn unpack(pattern: &str, delimiter: PatternDelimiter) -> &str {
    try_unpack(pattern, delimiter).unwrap_or_else(|err| {
        debug!(%err, "unpacked as empty");
        ""
    })
}
