//! Character classification for JavaScript identifiers.

/// `ZERO WIDTH NON-JOINER`, allowed inside identifiers.
pub const ZWNJ: char = '\u{200C}';
/// `ZERO WIDTH JOINER`, allowed inside identifiers.
pub const ZWJ: char = '\u{200D}';

pub fn is_identifier_start(ch: char) -> bool {
    ch == '$' || ch == '_' || unicode_ident::is_xid_start(ch)
}

pub fn is_identifier_part(ch: char) -> bool {
    ch == '$' || ch == ZWNJ || ch == ZWJ || unicode_ident::is_xid_continue(ch)
}

/// Line terminators and whitespace that separate tokens.
pub const fn is_white_space_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

/// Operator characters that combine into a single punctuation token.
pub const fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'+' | b'-' | b'*' | b'%' | b'&' | b'|' | b'^' | b'!' | b'<' | b'>' | b'?' | b'~'
    )
}

/// Check whether `name` is a plain identifier (no pattern syntax, no spaces).
pub fn is_identifier_text(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}
