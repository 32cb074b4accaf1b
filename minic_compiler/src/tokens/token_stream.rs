//! Forward-only token stream with conditional consumption
//!
//! The cursor never rewinds. Multi-token matches are all-or-nothing: either
//! every requested kind matches and the cursor moves past all of them, or
//! nothing is consumed.

use crate::tokens::token::{Token, TokenKind};
use crate::utils::{Position, Span};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// New stream over the remaining tokens with comments removed
    pub fn without_comments(&self) -> TokenStream {
        let tokens = self.tokens[self.cursor..]
            .iter()
            .filter(|token| !token.kind.is_ignorable())
            .cloned()
            .collect();
        TokenStream::new(tokens)
    }

    // === CORE OPERATIONS ===

    /// True while the cursor has not reached the end of the sequence
    pub fn has_more(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Consume and return the next token
    ///
    /// Callers are expected to check [`has_more`](Self::has_more) first; an
    /// exhausted stream yields `None` and leaves the cursor in place.
    pub fn consume_next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Consume the next token only if it has the given kind
    pub fn consume_next_if_kind(&mut self, kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == Some(kind) {
            self.consume_next()
        } else {
            None
        }
    }

    /// Consume a run of tokens only if every kind matches, in order
    ///
    /// Returns all matched tokens, or an empty vector with the cursor
    /// untouched when any kind fails to match or the stream runs out. An
    /// empty `kinds` slice trivially matches and consumes nothing.
    pub fn consume_next_sequence_if_kinds(&mut self, kinds: &[TokenKind]) -> Vec<Token> {
        let end = self.cursor + kinds.len();
        let Some(candidates) = self.tokens.get(self.cursor..end) else {
            return Vec::new();
        };

        let all_match = candidates
            .iter()
            .zip(kinds)
            .all(|(token, kind)| token.kind == *kind);
        if !all_match {
            return Vec::new();
        }

        let matched = candidates.to_vec();
        self.cursor = end;
        matched
    }

    // === LOOKAHEAD ===

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Look `n` tokens past the cursor (`0` is the next token)
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + n)
    }

    // === INSPECTION ===

    /// Index of the next token to be consumed
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The full sequence, consumed or not
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Zero-width span just past the last token, for end-of-input diagnostics
    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|token| Span::point(token.span.end()))
            .unwrap_or_else(Span::dummy)
    }
}

/// Builds token streams from (kind, text) pairs with computed spans
///
/// Tokens are laid out on one line separated by single spaces, which is
/// enough for grammar-level tests that do not go through the lexer.
#[derive(Debug)]
pub struct TokenStreamBuilder {
    file: Arc<str>,
    tokens: Vec<Token>,
    current_position: Position,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self::for_file("<builder>")
    }

    pub fn for_file(file: &str) -> Self {
        Self {
            file: Arc::from(file),
            tokens: Vec::new(),
            current_position: Position::start(),
        }
    }

    pub fn push_token(mut self, kind: TokenKind, text: &str) -> Self {
        if !self.tokens.is_empty() {
            self.current_position = self.current_position.advance(' ');
        }
        let start = self.current_position;
        let end = start.advance_str(text);

        self.tokens
            .push(Token::new(kind, text, self.file.clone(), Span::new(start, end)));
        self.current_position = end;
        self
    }

    pub fn push_tokens(mut self, tokens: &[(TokenKind, &str)]) -> Self {
        for (kind, text) in tokens {
            self = self.push_token(*kind, text);
        }
        self
    }

    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}
