//! Recursive-descent grammar analyzer
//!
//! Recognizes `DATA_TYPE IDENTIFIER ( ) { ... }` at the top level and
//! matches brace nesting inside bodies. Everything else is skipped. The
//! analyzer peeks at a data type before committing to a definition, so a
//! missing body never swallows the token that follows the signature.

use crate::config::compile_time::syntax::*;
use crate::config::runtime::AnalyzerPreferences;
use crate::grammar::{
    Block, DuplicatePolicy, FunctionDefinition, FunctionHeader, InsertOutcome, Program,
};
use crate::logging::{codes, Code};
use crate::syntax::diagnostic::{AnalysisMode, Diagnostic};
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{SourceLocation, Token, TokenKind, TokenStream};
use crate::utils::Span;
use crate::{log_debug, log_error, log_success, log_warning};
use std::sync::Arc;

/// Program plus whatever diagnostics analysis produced
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics discarded after the retention cap was reached
    pub dropped_diagnostics: usize,
}

/// Grammar analyzer over one comment-free token stream
pub struct GrammarAnalyzer {
    tokens: TokenStream,
    file: Arc<str>,
    mode: AnalysisMode,
    duplicate_policy: DuplicatePolicy,
    max_block_depth: usize,
    log_recognized_functions: bool,
    diagnostics: Vec<Diagnostic>,
    dropped_diagnostics: usize,
}

impl GrammarAnalyzer {
    /// Lenient analyzer that overwrites duplicates, at the compile-time depth limit
    pub fn new(tokens: TokenStream) -> Self {
        log_debug!("Creating grammar analyzer", "tokens" => tokens.len());

        let file = tokens
            .tokens()
            .first()
            .map_or_else(|| Arc::from("<input>"), |first| first.location.file.clone());

        Self {
            tokens,
            file,
            mode: AnalysisMode::Lenient,
            duplicate_policy: DuplicatePolicy::Overwrite,
            max_block_depth: MAX_BLOCK_DEPTH,
            log_recognized_functions: false,
            diagnostics: Vec::new(),
            dropped_diagnostics: 0,
        }
    }

    pub fn with_preferences(tokens: TokenStream, preferences: &AnalyzerPreferences) -> Self {
        let policy = if preferences.reject_duplicate_functions {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Overwrite
        };

        let mut analyzer = Self::new(tokens)
            .with_mode(AnalysisMode::from_strict_flag(preferences.strict_mode))
            .with_duplicate_policy(policy)
            .with_max_block_depth(preferences.effective_max_block_depth());
        analyzer.log_recognized_functions = preferences.log_recognized_functions;
        analyzer
    }

    pub fn with_mode(mut self, mode: AnalysisMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Limit brace nesting; clamped to `1..=MAX_BLOCK_DEPTH`
    pub fn with_max_block_depth(mut self, depth: usize) -> Self {
        self.max_block_depth = depth.clamp(1, MAX_BLOCK_DEPTH);
        self
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn max_block_depth(&self) -> usize {
        self.max_block_depth
    }

    /// Run the top-level loop until the stream is exhausted
    pub fn analyze(mut self) -> SyntaxResult<AnalysisResult> {
        let mut program = Program::new();

        if self.tokens.is_empty() {
            log_debug!("Token stream is empty; nothing to analyze");
            if self.mode.is_strict() {
                let span = self.tokens.end_span();
                self.report(codes::syntax::EMPTY_TOKEN_STREAM, "No tokens to analyze", None, span);
            }
        }

        while let Some(kind) = self.tokens.peek_kind() {
            if kind == TokenKind::DataType {
                if let Some(definition) = self.parse_function_definition()? {
                    self.insert(&mut program, definition)?;
                }
            } else {
                self.tokens.consume_next();
            }
        }

        log_success!(codes::success::ANALYSIS_COMPLETE,
            "Grammar analysis completed",
            "functions" => program.function_count(),
            "diagnostics" => self.diagnostics.len(),
            "mode" => format!("{:?}", self.mode)
        );

        Ok(AnalysisResult {
            program,
            diagnostics: self.diagnostics,
            dropped_diagnostics: self.dropped_diagnostics,
        })
    }

    // === FUNCTION RECOGNITION ===

    /// Attempt `DATA_TYPE IDENTIFIER ( ) Block` at the cursor
    ///
    /// The data type is always consumed. `Ok(None)` means the tokens did not
    /// form a definition; whatever followed the point of failure is left for
    /// the top-level loop.
    fn parse_function_definition(&mut self) -> SyntaxResult<Option<FunctionDefinition>> {
        let Some(return_type) = self.tokens.consume_next_if_kind(TokenKind::DataType) else {
            return Ok(None);
        };

        let signature = self
            .tokens
            .consume_next_sequence_if_kinds(&[TokenKind::Identifier, TokenKind::OpeningParenthesis]);
        let Some(name) = signature.first() else {
            self.skipped(
                &format!(
                    "Data type '{}' does not start a function definition",
                    return_type.text
                ),
                &return_type,
            );
            return Ok(None);
        };

        let Some(close) = self.tokens.consume_next_if_kind(TokenKind::ClosingParenthesis) else {
            self.skipped(
                &format!("Parameter list of '{}' is not recognized", name.text),
                name,
            );
            return Ok(None);
        };

        let Some(body) = self.parse_block(0)? else {
            self.skipped(&format!("Function '{}' has no body", name.text), name);
            return Ok(None);
        };

        let header = FunctionHeader::new(name.text.as_str(), return_type.text.as_str())
            .with_span(return_type.span.merge(close.span));

        if self.log_recognized_functions {
            log_success!(codes::success::FUNCTION_RECOGNIZED,
                "Function recognized",
                "name" => header.name,
                "return_type" => header.return_type,
                "line" => return_type.location.line
            );
        } else {
            log_debug!("Function recognized", "name" => header.name);
        }

        Ok(Some(FunctionDefinition::new(header, body)))
    }

    /// Hand a definition to the program's duplicate policy
    fn insert(&mut self, program: &mut Program, definition: FunctionDefinition) -> SyntaxResult<()> {
        let span = definition.span().unwrap_or_else(Span::dummy);

        match program.insert_function(definition, self.duplicate_policy) {
            InsertOutcome::Inserted => Ok(()),
            InsertOutcome::Replaced(previous) => {
                let message = format!(
                    "Function '{}' redefined; the later definition replaces the earlier one",
                    previous.name()
                );
                if self.mode.is_strict() {
                    log_warning!(codes::warnings::FUNCTION_REDEFINED, &message, span = span);
                    self.report(codes::warnings::FUNCTION_REDEFINED, &message, None, span);
                } else {
                    log_debug!("Function redefined", "name" => previous.name());
                }
                Ok(())
            }
            InsertOutcome::Rejected(refused) => {
                log_error!(codes::syntax::DUPLICATE_FUNCTION,
                    "Duplicate function definition",
                    span = span,
                    "name" => refused.name()
                );
                Err(SyntaxError::duplicate_function(refused.name(), span))
            }
        }
    }

    // === BLOCK RECOGNITION ===

    /// Match `{ ... }` with nested blocks; `depth` counts enclosing blocks
    ///
    /// Returns `Ok(None)` without consuming anything when the next token is
    /// not an opening brace.
    fn parse_block(&mut self, depth: usize) -> SyntaxResult<Option<Block>> {
        let Some(open) = self.tokens.consume_next_if_kind(TokenKind::OpeningCurlyBrace) else {
            return Ok(None);
        };

        if depth >= self.max_block_depth {
            log_error!(codes::syntax::MAX_BLOCK_DEPTH,
                "Maximum block depth exceeded",
                span = open.span,
                "depth" => depth + 1,
                "max_depth" => self.max_block_depth
            );
            return Err(SyntaxError::max_block_depth(self.max_block_depth, open.span));
        }

        let mut children = Vec::new();
        while let Some(kind) = self.tokens.peek_kind() {
            match kind {
                TokenKind::OpeningCurlyBrace => {
                    if let Some(child) = self.parse_block(depth + 1)? {
                        children.push(child);
                    }
                }
                TokenKind::ClosingCurlyBrace => {
                    let close = self.tokens.consume_next();
                    let span = close.map_or(open.span, |close| open.span.merge(close.span));
                    return Ok(Some(Block {
                        children,
                        terminated: true,
                        span: Some(span),
                    }));
                }
                // Statement content is not parsed
                _ => {
                    self.tokens.consume_next();
                }
            }
        }

        self.unterminated(&open)?;

        Ok(Some(Block {
            children,
            terminated: false,
            span: Some(open.span.merge(self.tokens.end_span())),
        }))
    }

    /// Input ended inside a block opened at `open`
    fn unterminated(&mut self, open: &Token) -> SyntaxResult<()> {
        let message = format!(
            "Block opened at line {} is never closed",
            open.location.line
        );

        if self.mode.is_strict() {
            log_error!(codes::syntax::UNMATCHED_BLOCK_DELIMITER, &message, span = open.span);
            return Err(SyntaxError::unmatched_delimiter(&open.text, open.span));
        }

        log_warning!(codes::warnings::UNTERMINATED_BLOCK, &message, span = open.span);
        Ok(())
    }

    // === DIAGNOSTICS ===

    /// A construct was skipped; reported only in strict mode
    fn skipped(&mut self, message: &str, at: &Token) {
        if self.mode.is_strict() {
            self.report(codes::warnings::SKIPPED_CONSTRUCT, message, Some(at), at.span);
        } else {
            log_debug!("Skipped construct", "reason" => message);
        }
    }

    fn report(&mut self, code: Code, message: &str, at: Option<&Token>, span: Span) {
        if self.diagnostics.len() >= MAX_DIAGNOSTICS {
            self.dropped_diagnostics += 1;
            return;
        }

        let location = at.map_or_else(
            || SourceLocation::from_position(self.file.clone(), span.start()),
            |token| token.location.clone(),
        );

        self.diagnostics.push(Diagnostic::new(code, message, location, span));
    }
}
