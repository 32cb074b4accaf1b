//! Token kinds, source locations and the token record itself
use crate::utils::{Position, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Closed set of token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Invalid,
    Keyword,
    Identifier,
    Constant,
    StringLiteral,
    Operator,
    Punctuator,
    Comment,
    /// Type-specifier keyword (`int`, `char`, `struct`, ...)
    DataType,
    OpeningParenthesis,
    ClosingParenthesis,
    OpeningCurlyBrace,
    ClosingCurlyBrace,
}

impl TokenKind {
    /// Every kind, in declaration order
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Invalid,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Constant,
        TokenKind::StringLiteral,
        TokenKind::Operator,
        TokenKind::Punctuator,
        TokenKind::Comment,
        TokenKind::DataType,
        TokenKind::OpeningParenthesis,
        TokenKind::ClosingParenthesis,
        TokenKind::OpeningCurlyBrace,
        TokenKind::ClosingCurlyBrace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Constant => "CONSTANT",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Comment => "COMMENT",
            TokenKind::DataType => "DATA_TYPE",
            TokenKind::OpeningParenthesis => "OPENING_PARENTHESIS",
            TokenKind::ClosingParenthesis => "CLOSING_PARENTHESIS",
            TokenKind::OpeningCurlyBrace => "OPENING_CURLY_BRACE",
            TokenKind::ClosingCurlyBrace => "CLOSING_CURLY_BRACE",
        }
    }

    /// Kinds the grammar analyzer never needs to see
    pub fn is_ignorable(&self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    /// Reserved words, whether control keywords or type specifiers
    pub fn is_reserved_word(&self) -> bool {
        matches!(self, TokenKind::Keyword | TokenKind::DataType)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a token came from: file, 1-based line and 1-based column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: Arc<str>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    pub fn from_position(file: Arc<str>, position: Position) -> Self {
        Self::new(file, position.line, position.column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Immutable lexeme record produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text consumed for this token
    pub text: String,
    pub location: SourceLocation,
    /// Byte and line/column extent in the source buffer
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, file: Arc<str>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            location: SourceLocation::from_position(file, span.start()),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.kind, self.text)
    }
}
