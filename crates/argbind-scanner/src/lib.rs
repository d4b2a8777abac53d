//! Scanner/tokenizer for JavaScript parameter-list text.
//!
//! This crate provides the lexical layer the parameter parser is built on:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine
//! - `char_codes` - Identifier character classification
//! - `top_level` - Skip-aware splitting and searching at bracket depth zero

pub mod char_codes;

mod syntax_kind;
pub use syntax_kind::SyntaxKind;

mod scanner;
pub use scanner::{ScannerState, Token, tokenize};

pub mod top_level;
pub use top_level::{find_top_level, matching_delimiter, split_top_level, strip_comments};
