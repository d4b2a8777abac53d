//! Scanner state machine.
//!
//! The scanner walks JavaScript source text one token at a time. It knows
//! enough of the lexical grammar to step over strings, template literals
//! (including `${...}` substitutions), regular expressions and comments, so
//! that brackets and commas inside them are never mistaken for structure.

use crate::SyntaxKind;
use crate::char_codes::{is_identifier_part, is_identifier_start, is_operator_byte, is_white_space_byte};
use argbind_common::Span;

/// A significant token and its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.get_text(source)
    }
}

/// Collect every non-trivia token of `source`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = ScannerState::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan_significant();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push(Token {
            kind,
            span: scanner.token_span(),
        });
    }
    tokens
}

pub struct ScannerState<'a> {
    source: &'a str,
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    /// Last non-trivia token, used to tell regular expressions from division.
    last_significant: SyntaxKind,
}

impl<'a> ScannerState<'a> {
    pub fn new(source: &'a str) -> Self {
        ScannerState {
            source,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            last_significant: SyntaxKind::Unknown,
        }
    }

    pub fn source_text(&self) -> &'a str {
        self.source
    }

    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    pub fn token_pos(&self) -> usize {
        self.token_start
    }

    pub fn token_end(&self) -> usize {
        self.pos
    }

    pub fn token_span(&self) -> Span {
        Span::from_usize(self.token_start, self.pos)
    }

    pub fn token_text(&self) -> &'a str {
        self.source.get(self.token_start..self.pos).unwrap_or("")
    }

    /// Scan the next token, skipping trivia.
    pub fn scan_significant(&mut self) -> SyntaxKind {
        loop {
            let kind = self.scan();
            if !kind.is_trivia() {
                return kind;
            }
        }
    }

    /// Scan the next token, trivia included.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_start = self.pos;
        let bytes = self.source.as_bytes();
        let Some(&ch) = bytes.get(self.pos) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        let kind = match ch {
            b if is_white_space_byte(b) => {
                while self.pos < bytes.len() && is_white_space_byte(bytes[self.pos]) {
                    self.pos += 1;
                }
                SyntaxKind::WhitespaceTrivia
            }
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b'.' => {
                if self.source[self.pos..].starts_with("...") {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else if bytes.get(self.pos + 1).is_some_and(u8::is_ascii_digit) {
                    self.scan_number()
                } else {
                    self.single(SyntaxKind::DotToken)
                }
            }
            b'=' => match bytes.get(self.pos + 1) {
                Some(b'>') => {
                    self.pos += 2;
                    SyntaxKind::EqualsGreaterThanToken
                }
                Some(b'=') => {
                    self.skip_equals_run();
                    SyntaxKind::OperatorToken
                }
                _ => self.single(SyntaxKind::EqualsToken),
            },
            b'\'' | b'"' => self.scan_string(ch),
            b'`' => self.scan_template(),
            b'/' => match bytes.get(self.pos + 1) {
                Some(b'/') => self.scan_single_line_comment(),
                Some(b'*') => self.scan_multi_line_comment(),
                _ if self.last_significant.allows_regex_after() => self.scan_regex(),
                _ => {
                    self.pos += 1;
                    self.skip_equals_run();
                    SyntaxKind::OperatorToken
                }
            },
            b'0'..=b'9' => self.scan_number(),
            b if is_operator_byte(b) => self.scan_operator(),
            _ => self.scan_identifier_or_unknown(),
        };

        self.pos = self.pos.min(bytes.len());
        self.token = kind;
        if !kind.is_trivia() {
            self.last_significant = kind;
        }
        kind
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn skip_equals_run(&mut self) {
        let bytes = self.source.as_bytes();
        while bytes.get(self.pos) == Some(&b'=') {
            self.pos += 1;
        }
    }

    fn scan_operator(&mut self) -> SyntaxKind {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        while self.pos < bytes.len() && is_operator_byte(bytes[self.pos]) {
            self.pos += 1;
        }
        let run = &bytes[start..self.pos];
        // `a >= b`, `a !== b`, `x **= 2`: the trailing `=` belongs to the operator.
        if bytes.get(self.pos) == Some(&b'=') && bytes.get(self.pos + 1) != Some(&b'>') {
            self.skip_equals_run();
            return SyntaxKind::OperatorToken;
        }
        match run {
            b"*" => SyntaxKind::AsteriskToken,
            b"?" => SyntaxKind::QuestionToken,
            _ => SyntaxKind::OperatorToken,
        }
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let bytes = self.source.as_bytes();
        let is_hex = bytes[self.pos..].starts_with(b"0x") || bytes[self.pos..].starts_with(b"0X");
        while let Some(&b) = bytes.get(self.pos) {
            let exponent_sign = !is_hex
                && (b == b'+' || b == b'-')
                && matches!(bytes.get(self.pos.wrapping_sub(1)), Some(b'e' | b'E'));
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        let bytes = self.source.as_bytes();
        self.pos += 1;
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'\\' => self.pos += 2,
                b'\n' | b'\r' => break, // unterminated
                _ if b == quote => {
                    self.pos += 1;
                    break;
                }
                _ => self.pos += 1,
            }
        }
        SyntaxKind::StringLiteral
    }

    fn scan_template(&mut self) -> SyntaxKind {
        let start = self.token_start;
        self.pos += 1;
        while let Some(&b) = self.source.as_bytes().get(self.pos) {
            match b {
                b'\\' => self.pos += 2,
                b'`' => {
                    self.pos += 1;
                    break;
                }
                b'$' if self.source.as_bytes().get(self.pos + 1) == Some(&b'{') => {
                    self.pos += 2;
                    self.skip_template_substitution();
                }
                _ => self.pos += 1,
            }
        }
        self.token_start = start;
        SyntaxKind::TemplateLiteral
    }

    /// Skip the body of a `${ ... }` substitution, up to and including its `}`.
    fn skip_template_substitution(&mut self) {
        self.last_significant = SyntaxKind::Unknown;
        let mut depth = 0u32;
        loop {
            match self.scan() {
                SyntaxKind::EndOfFileToken => return,
                SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBraceToken => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
    }

    fn scan_regex(&mut self) -> SyntaxKind {
        let bytes = self.source.as_bytes();
        self.pos += 1;
        let mut in_class = false;
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'\\' => {
                    self.pos += 2;
                    continue;
                }
                b'\n' | b'\r' => break, // unterminated
                b'[' => in_class = true,
                b']' => in_class = false,
                b'/' if !in_class => {
                    self.pos += 1;
                    break;
                }
                _ => {}
            }
            self.pos += 1;
        }
        // flags
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphanumeric() {
            self.pos += 1;
        }
        SyntaxKind::RegularExpressionLiteral
    }

    fn scan_single_line_comment(&mut self) -> SyntaxKind {
        let rest = &self.source.as_bytes()[self.pos..];
        self.pos += memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        SyntaxKind::SingleLineCommentTrivia
    }

    fn scan_multi_line_comment(&mut self) -> SyntaxKind {
        let body = &self.source.as_bytes()[self.pos + 2..];
        self.pos += match memchr::memmem::find(body, b"*/") {
            Some(offset) => offset + 4,
            None => body.len() + 2, // unclosed comment runs to the end
        };
        SyntaxKind::MultiLineCommentTrivia
    }

    fn scan_identifier_or_unknown(&mut self) -> SyntaxKind {
        // An escape inside a string can leave `pos` inside a multi-byte char.
        let Some(rest) = self.source.get(self.pos..) else {
            self.pos += 1;
            return SyntaxKind::Unknown;
        };
        let mut chars = rest.char_indices();
        let Some((_, first)) = chars.next() else {
            return SyntaxKind::EndOfFileToken;
        };
        if !is_identifier_start(first) {
            self.pos += first.len_utf8();
            return if first.is_whitespace() {
                SyntaxKind::WhitespaceTrivia
            } else {
                SyntaxKind::Unknown
            };
        }
        let len = chars
            .find(|&(_, c)| !is_identifier_part(c))
            .map_or(rest.len(), |(offset, _)| offset);
        self.pos += len;
        SyntaxKind::Identifier
    }
}
