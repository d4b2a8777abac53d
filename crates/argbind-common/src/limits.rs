//! Centralized limits for parameter-list parsing.
//!
//! Parameter declarations may come from untrusted source text, so every
//! recursive walk over a binding pattern is bounded by one of these values.

/// Maximum nesting depth of destructuring patterns.
///
/// Each nested `[...]` or `{...}` inside a parameter adds one level. A pattern
/// nested deeper than this is decomposed as an empty pattern of the same kind,
/// which resolves to an empty array or object.
///
/// # JavaScript example
///
/// ```javascript
/// // depth 3: [ -> { -> [
/// function f([{ a: [b] }]) {}
/// ```
pub const MAX_PATTERN_DEPTH: u32 = 64;

/// Maximum length, in bytes, of callable source text the introspector will scan.
///
/// Longer sources are still accepted, but only the prefix up to this length is
/// searched for the parameter list.
pub const MAX_SOURCE_SCAN_BYTES: usize = 1 << 20;
