//! Syntax analysis - token stream to program skeleton
//!
//! Comments are dropped here, not in the lexer: every entry point filters
//! the stream with [`TokenStream::without_comments`] before analysis.

mod diagnostic;
mod error;
mod parser;

pub use diagnostic::{AnalysisMode, Diagnostic};
pub use error::{SyntaxError, SyntaxResult};
pub use parser::{AnalysisResult, GrammarAnalyzer};

use crate::config::compile_time::syntax::*;
use crate::config::runtime::AnalyzerPreferences;
use crate::logging::codes;
use crate::tokens::TokenStream;
use crate::{log_debug, log_error};

/// Analyze a token stream with the given preferences
pub fn analyze(
    token_stream: &TokenStream,
    preferences: &AnalyzerPreferences,
) -> SyntaxResult<AnalysisResult> {
    let significant = token_stream.without_comments();
    log_debug!("Starting syntax analysis",
        "tokens" => significant.len(),
        "comments_dropped" => token_stream.remaining() - significant.len()
    );

    let result = GrammarAnalyzer::with_preferences(significant, preferences).analyze();

    if let Err(error) = &result {
        log_error!(error.error_code(), "Syntax analysis failed",
            "error" => error
        );
    }

    result
}

/// Analyze with default lenient settings
pub fn analyze_lenient(token_stream: &TokenStream) -> SyntaxResult<AnalysisResult> {
    GrammarAnalyzer::new(token_stream.without_comments()).analyze()
}

/// Verify every syntax code is registered (for system startup)
pub fn init_syntax_logging() -> Result<(), String> {
    let syntax_codes = [
        codes::syntax::EMPTY_TOKEN_STREAM,
        codes::syntax::UNMATCHED_BLOCK_DELIMITER,
        codes::syntax::DUPLICATE_FUNCTION,
        codes::syntax::MAX_BLOCK_DEPTH,
        codes::warnings::SKIPPED_CONSTRUCT,
        codes::warnings::UNTERMINATED_BLOCK,
        codes::warnings::FUNCTION_REDEFINED,
    ];

    for code in &syntax_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_debug!("Syntax limits initialized",
        "max_block_depth" => MAX_BLOCK_DEPTH,
        "max_diagnostics" => MAX_DIAGNOSTICS
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DuplicatePolicy;
    use crate::lexical::tokenize;
    use crate::tokens::{TokenKind::*, TokenStreamBuilder};
    use assert_matches::assert_matches;

    fn stream(source: &str) -> TokenStream {
        TokenStream::new(tokenize(source, "test.c").expect("tokenize"))
    }

    fn lenient(source: &str) -> AnalysisResult {
        analyze_lenient(&stream(source)).expect("analyze")
    }

    fn strict(source: &str) -> SyntaxResult<AnalysisResult> {
        GrammarAnalyzer::new(stream(source).without_comments())
            .with_mode(AnalysisMode::Strict)
            .analyze()
    }

    #[test]
    fn test_recognizes_main() {
        let result = lenient("int main() { return 0; }");
        let program = result.program;

        assert_eq!(program.function_count(), 1);
        let main = program.get("main").unwrap();
        assert_eq!(main.header.return_type, "int");
        assert!(main.header.parameters.is_empty());
        assert!(main.body.children.is_empty());
        assert!(main.body.is_well_formed());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_nested_block_consumes_all_braces() {
        let tokens = stream("int f() { { } }");
        assert_eq!(tokens.len(), 8);

        let result = GrammarAnalyzer::new(tokens).analyze().unwrap();
        let f = result.program.get("f").unwrap();
        assert_eq!(f.body.children.len(), 1);
        assert!(f.body.children[0].children.is_empty());

        // Nothing left over for a following top-level scan
        let trailing = lenient("int f() { { } } int g() { }");
        assert_eq!(trailing.program.names().collect::<Vec<_>>(), vec!["f", "g"]);
    }

    #[test]
    fn test_duplicate_keeps_second_definition() {
        let result = lenient("int f() { } void f() { { } }");
        assert_eq!(result.program.function_count(), 1);
        let f = result.program.get("f").unwrap();
        assert_eq!(f.header.return_type, "void");
        assert_eq!(f.body.children.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected_by_policy() {
        let error = GrammarAnalyzer::new(stream("int f() { } void f() { }"))
            .with_duplicate_policy(DuplicatePolicy::Reject)
            .analyze()
            .unwrap_err();
        assert_matches!(error, SyntaxError::DuplicateFunction { ref name, .. } if name == "f");
        assert_eq!(error.error_code(), codes::syntax::DUPLICATE_FUNCTION);
    }

    #[test]
    fn test_strict_reports_redefinition() {
        let result = strict("int f() { } int f() { }").unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].code, codes::warnings::FUNCTION_REDEFINED);
    }

    #[test]
    fn test_non_function_constructs_are_skipped() {
        let source = "int x; char *p; int f(int a) { } struct s { int y; }; int g() { }";
        let result = lenient(source);
        assert_eq!(result.program.names().collect::<Vec<_>>(), vec!["g"]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_strict_reports_skipped_constructs_with_location() {
        let result = strict("int x;\nint f(int a) { }\nint g();\nint h() { }").unwrap();
        assert_eq!(result.program.names().collect::<Vec<_>>(), vec!["h"]);

        let found: Vec<_> = result
            .diagnostics
            .iter()
            .map(|d| (d.code.as_str(), d.location.line, d.location.column))
            .collect();
        // `int a` inside the unparsed parameter list is tried on its own
        assert_eq!(
            found,
            vec![("W040", 1, 1), ("W040", 2, 5), ("W040", 2, 7), ("W040", 3, 5)]
        );
        assert!(result.diagnostics[3].message.contains("'g' has no body"));
    }

    #[test]
    fn test_missing_body_does_not_swallow_next_definition() {
        let result = lenient("int f() int g() { }");
        assert!(!result.program.contains("f"));
        assert!(result.program.contains("g"));
    }

    #[test]
    fn test_unterminated_block_lenient_returns_partial_block() {
        let result = lenient("int f() { { }");
        let f = result.program.get("f").unwrap();
        assert!(!f.body.terminated);
        assert_eq!(f.body.children.len(), 1);
        assert!(f.body.children[0].terminated);
        assert!(!f.body.is_well_formed());
    }

    #[test]
    fn test_unterminated_block_strict_fails() {
        let error = strict("int f() { { }").unwrap_err();
        assert_matches!(error, SyntaxError::UnmatchedBlockDelimiter { ref delimiter, span } => {
            assert_eq!(delimiter, "{");
            assert_eq!(span.start().column, 9);
        });
    }

    #[test]
    fn test_block_depth_limit() {
        let source = "int f() { { { } } }";

        let error = GrammarAnalyzer::new(stream(source))
            .with_max_block_depth(2)
            .analyze()
            .unwrap_err();
        assert_matches!(error, SyntaxError::MaxBlockDepth { max_depth: 2, .. });

        let ok = GrammarAnalyzer::new(stream(source))
            .with_max_block_depth(3)
            .analyze()
            .unwrap();
        assert_eq!(ok.program.get("f").unwrap().body.depth(), 3);
    }

    #[test]
    fn test_block_depth_is_clamped() {
        let analyzer = GrammarAnalyzer::new(TokenStream::default()).with_max_block_depth(0);
        assert_eq!(analyzer.max_block_depth(), 1);

        let analyzer =
            GrammarAnalyzer::new(TokenStream::default()).with_max_block_depth(usize::MAX);
        assert_eq!(analyzer.max_block_depth(), MAX_BLOCK_DEPTH);
    }

    #[test]
    fn test_comments_are_dropped_before_analysis() {
        let tokens = stream("int /* ret */ main // name\n() { /* } */ }");
        let result = analyze(&tokens, &AnalyzerPreferences::default()).unwrap();
        assert!(result.program.contains("main"));
    }

    #[test]
    fn test_builder_stream_without_lexer() {
        let tokens = TokenStreamBuilder::new()
            .push_tokens(&[
                (DataType, "void"),
                (Identifier, "run"),
                (OpeningParenthesis, "("),
                (ClosingParenthesis, ")"),
                (OpeningCurlyBrace, "{"),
                (ClosingCurlyBrace, "}"),
            ])
            .build();
        let result = GrammarAnalyzer::new(tokens).analyze().unwrap();
        let run = result.program.get("run").unwrap();
        assert_eq!(run.header.return_type, "void");
        assert_eq!(run.header.signature(), "void run()");
    }

    #[test]
    fn test_empty_stream() {
        let lenient = GrammarAnalyzer::new(TokenStream::default()).analyze().unwrap();
        assert!(lenient.program.is_empty());
        assert!(lenient.diagnostics.is_empty());

        let strict = GrammarAnalyzer::new(TokenStream::default())
            .with_mode(AnalysisMode::Strict)
            .analyze()
            .unwrap();
        assert_eq!(strict.diagnostics[0].code, codes::syntax::EMPTY_TOKEN_STREAM);
    }

    #[test]
    fn test_preferences_select_behavior() {
        let preferences = AnalyzerPreferences {
            strict_mode: true,
            reject_duplicate_functions: true,
            max_block_depth: 8,
            log_recognized_functions: true,
        };
        let analyzer = GrammarAnalyzer::with_preferences(TokenStream::default(), &preferences);
        assert!(analyzer.mode().is_strict());
        assert_eq!(analyzer.max_block_depth(), 8.min(MAX_BLOCK_DEPTH));

        let error = analyze(&stream("int f() { } int f() { }"), &preferences).unwrap_err();
        assert_eq!(error.error_code(), codes::syntax::DUPLICATE_FUNCTION);
    }

    #[test]
    fn test_init_syntax_logging() {
        assert!(init_syntax_logging().is_ok());
    }
}
