/// Token kinds produced by [`ScannerState`](crate::ScannerState).
///
/// Only the distinctions that matter for locating and splitting parameter
/// declarations are kept; every other operator collapses into `OperatorToken`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,
    // Trivia
    WhitespaceTrivia,
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    // Literals and names
    Identifier,
    NumericLiteral,
    StringLiteral,
    /// A whole template literal, substitutions included.
    TemplateLiteral,
    RegularExpressionLiteral,
    // Punctuation
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    OpenBraceToken,
    CloseBraceToken,
    CommaToken,
    ColonToken,
    SemicolonToken,
    DotToken,
    DotDotDotToken,
    /// A lone `=` (assignment / default value).
    EqualsToken,
    EqualsGreaterThanToken,
    AsteriskToken,
    QuestionToken,
    /// Any other operator, including `==`, `!==`, `<=`, `+=` and `/`.
    OperatorToken,
}

impl SyntaxKind {
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WhitespaceTrivia
                | SyntaxKind::SingleLineCommentTrivia
                | SyntaxKind::MultiLineCommentTrivia
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            SyntaxKind::SingleLineCommentTrivia | SyntaxKind::MultiLineCommentTrivia
        )
    }

    pub const fn is_open_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::OpenParenToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
        )
    }

    pub const fn is_close_delimiter(self) -> bool {
        matches!(
            self,
            SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
        )
    }

    /// The closing token matching an opening delimiter.
    pub const fn closing_delimiter(self) -> Option<SyntaxKind> {
        match self {
            SyntaxKind::OpenParenToken => Some(SyntaxKind::CloseParenToken),
            SyntaxKind::OpenBracketToken => Some(SyntaxKind::CloseBracketToken),
            SyntaxKind::OpenBraceToken => Some(SyntaxKind::CloseBraceToken),
            _ => None,
        }
    }

    /// Whether a `/` directly after this token starts a regular expression
    /// rather than a division.
    pub const fn allows_regex_after(self) -> bool {
        !matches!(
            self,
            SyntaxKind::Identifier
                | SyntaxKind::NumericLiteral
                | SyntaxKind::StringLiteral
                | SyntaxKind::TemplateLiteral
                | SyntaxKind::RegularExpressionLiteral
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
        )
    }
}
