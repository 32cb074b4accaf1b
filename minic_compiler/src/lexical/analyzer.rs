//! Core lexical analyzer
//!
//! Single left-to-right pass with at most one character of lookahead outside
//! the classifiers. Every step either emits a token or skips exactly one
//! character, so the scan position strictly increases.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::lexical::classifiers::{self, is_identifier_start, Scan};
use crate::lexical::keywords::match_keyword;
use crate::logging::codes;
use crate::tokens::{SourceLocation, Token, TokenKind};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Two-character operators; each falls back to its first character alone
const TWO_CHAR_OPERATORS: [&str; 11] = [
    "==", "!=", "<=", "<<", ">=", ">>", "||", "&&", "++", "--", "->",
];

/// Lexical analysis errors; any of them is fatal for the compilation unit
#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("Unterminated multi-line comment starting at {location}")]
    UnterminatedComment { location: SourceLocation, span: Span },

    #[error("Unterminated string literal starting at {location}")]
    UnterminatedString { location: SourceLocation, span: Span },

    #[error("Identifier too long at {location}: {length} characters (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong {
        length: usize,
        location: SourceLocation,
        span: Span,
    },

    #[error("String literal too large at {location}: {size} bytes (max {MAX_STRING_SIZE})")]
    StringTooLarge {
        size: usize,
        location: SourceLocation,
        span: Span,
    },

    #[error("Comment too long at {location}: {length} bytes (max {MAX_COMMENT_LENGTH})")]
    CommentTooLong {
        length: usize,
        location: SourceLocation,
        span: Span,
    },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize, span: Span },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::CommentTooLong { .. } => codes::lexical::COMMENT_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOKEN_LIMIT_EXCEEDED,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedComment { span, .. }
            | LexerError::UnterminatedString { span, .. }
            | LexerError::IdentifierTooLong { span, .. }
            | LexerError::StringTooLarge { span, .. }
            | LexerError::CommentTooLong { span, .. }
            | LexerError::TooManyTokens { span, .. } => *span,
        }
    }
}

/// Lexical analysis metrics for one compilation unit
#[derive(Debug, Default, Clone, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub tokens_by_kind: BTreeMap<TokenKind, usize>,
    pub comment_count: usize,
    pub line_count: u32,

    // Detailed metrics, only collected when enabled
    pub skipped_chars: usize,
    pub max_identifier_length: usize,
    pub max_string_length: usize,
    pub max_comment_length: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;
        *self.tokens_by_kind.entry(token.kind).or_insert(0) += 1;

        if token.kind == TokenKind::Comment {
            self.comment_count += 1;
        }

        if !preferences.collect_detailed_metrics {
            return;
        }

        let len = token.text.len();
        match token.kind {
            TokenKind::Identifier => {
                self.max_identifier_length = self.max_identifier_length.max(len)
            }
            TokenKind::StringLiteral => self.max_string_length = self.max_string_length.max(len),
            TokenKind::Comment => self.max_comment_length = self.max_comment_length.max(len),
            _ => {}
        }
    }

    pub(crate) fn record_skipped_char(&mut self, preferences: &LexicalPreferences) {
        if preferences.collect_detailed_metrics {
            self.skipped_chars += 1;
        }
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.tokens_by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Scan position over one source buffer
struct Cursor<'a> {
    source: &'a str,
    file: Arc<str>,
    position: Position,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.position.offset..]
    }

    fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn span_of(&self, len: usize) -> Span {
        let text = &self.rest()[..len];
        Span::new(self.position, self.position.advance_str(text))
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::from_position(self.file.clone(), self.position)
    }

    /// Build a token from the next `len` bytes and move past them
    fn take(&mut self, kind: TokenKind, len: usize) -> Token {
        let span = self.span_of(len);
        let token = Token::new(kind, &self.rest()[..len], self.file.clone(), span);
        self.position = span.end();
        token
    }

    fn skip(&mut self, ch: char) {
        self.position = self.position.advance(ch);
    }
}

/// Core lexical analyzer with compile-time security boundaries
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Metrics from the most recent call to [`tokenize`](Self::tokenize)
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Convert a source buffer into its token sequence
    ///
    /// Comments are kept as `Comment` tokens. Characters no rule claims
    /// (whitespace included) are skipped silently. The first unterminated
    /// comment or string, or the first exceeded limit, aborts the scan.
    pub fn tokenize(&mut self, source: &str, file: &str) -> Result<Vec<Token>, LexerError> {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "file" => file,
            "bytes" => source.len(),
            "max_tokens_allowed" => MAX_TOKEN_COUNT
        );

        let mut cursor = Cursor {
            source,
            file: Arc::from(file),
            position: Position::start(),
        };
        let mut tokens = Vec::new();
        let mut counted_tokens = 0usize;

        while let Some(ch) = cursor.current() {
            let token = match ch {
                '/' => self.scan_slash(&mut cursor)?,
                '{' => cursor.take(TokenKind::OpeningCurlyBrace, 1),
                '}' => cursor.take(TokenKind::ClosingCurlyBrace, 1),
                '(' => cursor.take(TokenKind::OpeningParenthesis, 1),
                ')' => cursor.take(TokenKind::ClosingParenthesis, 1),
                '[' | ']' | ';' => cursor.take(TokenKind::Punctuator, 1),
                '*' => cursor.take(TokenKind::Operator, 1),
                '=' | '!' | '<' | '>' | '|' | '&' | '+' | '-' => Self::scan_operator(&mut cursor),
                '0'..='9' => Self::scan_constant(&mut cursor),
                '"' => self.scan_string(&mut cursor)?,
                c if is_identifier_start(c) => self.scan_word(&mut cursor)?,
                other => {
                    cursor.skip(other);
                    self.metrics.record_skipped_char(&self.preferences);
                    continue;
                }
            };

            if !token.is_comment() || self.preferences.count_comments_towards_limit {
                counted_tokens += 1;
                if counted_tokens > MAX_TOKEN_COUNT {
                    log_error!(codes::lexical::TOKEN_LIMIT_EXCEEDED,
                        "Token limit exceeded",
                        span = token.span,
                        "file" => file,
                        "max_tokens" => MAX_TOKEN_COUNT
                    );
                    return Err(LexerError::TooManyTokens {
                        count: counted_tokens,
                        span: token.span,
                    });
                }
            }

            self.metrics.record_token(&token, &self.preferences);
            tokens.push(token);
        }

        self.metrics.line_count = if source.is_empty() {
            0
        } else {
            cursor.position.line - u32::from(source.ends_with('\n'))
        };

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Tokenization completed",
            "file" => file,
            "tokens" => tokens.len(),
            "comments" => self.metrics.comment_count,
            "lines" => self.metrics.line_count
        );

        Ok(tokens)
    }

    // === DISPATCH RULES ===

    /// `/` starts a line comment, a block comment, or is the division operator
    fn scan_slash(&mut self, cursor: &mut Cursor<'_>) -> Result<Token, LexerError> {
        let rest = cursor.rest();

        let len = match classifiers::scan_single_line_comment(rest) {
            Scan::Matched(len) => len,
            _ => match classifiers::scan_multi_line_comment(rest) {
                Scan::Matched(len) => len,
                Scan::Unterminated(len) => {
                    let location = cursor.location();
                    let span = cursor.span_of(len);
                    self.report(
                        codes::lexical::UNTERMINATED_COMMENT,
                        "Unterminated multi-line comment",
                        &location,
                        span,
                    );
                    return Err(LexerError::UnterminatedComment { location, span });
                }
                Scan::NoMatch => return Ok(cursor.take(TokenKind::Operator, 1)),
            },
        };

        if len > MAX_COMMENT_LENGTH {
            let location = cursor.location();
            let span = cursor.span_of(len);
            self.report(
                codes::lexical::COMMENT_TOO_LONG,
                "Comment exceeds maximum length",
                &location,
                span,
            );
            return Err(LexerError::CommentTooLong {
                length: len,
                location,
                span,
            });
        }

        Ok(cursor.take(TokenKind::Comment, len))
    }

    /// Maximal munch over the two-character operator table
    fn scan_operator(cursor: &mut Cursor<'_>) -> Token {
        let is_pair = cursor
            .rest()
            .get(..2)
            .is_some_and(|pair| TWO_CHAR_OPERATORS.contains(&pair));
        cursor.take(TokenKind::Operator, if is_pair { 2 } else { 1 })
    }

    fn scan_constant(cursor: &mut Cursor<'_>) -> Token {
        match classifiers::scan_number(cursor.rest()) {
            Scan::Matched(len) => cursor.take(TokenKind::Constant, len),
            // Dispatch guarantees a leading digit
            _ => cursor.take(TokenKind::Constant, 1),
        }
    }

    fn scan_string(&mut self, cursor: &mut Cursor<'_>) -> Result<Token, LexerError> {
        let len = match classifiers::scan_string_literal(cursor.rest()) {
            Scan::Matched(len) => len,
            Scan::Unterminated(len) => {
                let location = cursor.location();
                let span = cursor.span_of(len);
                self.report(
                    codes::lexical::UNTERMINATED_STRING,
                    "Unterminated string literal",
                    &location,
                    span,
                );
                return Err(LexerError::UnterminatedString { location, span });
            }
            // Dispatch guarantees the opening quote
            Scan::NoMatch => 1,
        };

        if len > MAX_STRING_SIZE {
            let location = cursor.location();
            let span = cursor.span_of(len);
            self.report(
                codes::lexical::STRING_TOO_LARGE,
                "String literal exceeds maximum size",
                &location,
                span,
            );
            return Err(LexerError::StringTooLarge {
                size: len,
                location,
                span,
            });
        }

        Ok(cursor.take(TokenKind::StringLiteral, len))
    }

    /// Reserved word from the per-letter table, else an identifier
    fn scan_word(&mut self, cursor: &mut Cursor<'_>) -> Result<Token, LexerError> {
        if let Some((word, kind)) = match_keyword(cursor.rest()) {
            return Ok(cursor.take(kind, word.len()));
        }

        let len = match classifiers::scan_identifier(cursor.rest()) {
            Scan::Matched(len) => len,
            _ => 1,
        };

        if len > MAX_IDENTIFIER_LENGTH {
            let location = cursor.location();
            let span = cursor.span_of(len);
            self.report(
                codes::lexical::IDENTIFIER_TOO_LONG,
                "Identifier exceeds maximum length",
                &location,
                span,
            );
            return Err(LexerError::IdentifierTooLong {
                length: len,
                location,
                span,
            });
        }

        Ok(cursor.take(TokenKind::Identifier, len))
    }

    fn report(
        &self,
        code: crate::logging::Code,
        message: &str,
        location: &SourceLocation,
        span: Span,
    ) {
        if self.preferences.include_position_in_errors {
            log_error!(code, message,
                span = span,
                "file" => location.file,
                "line" => location.line,
                "column" => location.column
            );
        } else {
            log_error!(code, message, "file" => location.file);
        }
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
