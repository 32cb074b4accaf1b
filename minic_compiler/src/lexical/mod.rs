//! Lexical analysis
//!
//! Turns a source buffer into an ordered token sequence. Reserved words are
//! looked up in a per-letter table, operators use one character of
//! lookahead, and the remaining categories are delegated to the lexeme
//! classifiers.

pub mod analyzer;
pub mod classifiers;
pub mod keywords;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::Token;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use classifiers::Scan;

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize a source buffer with default preferences
pub fn tokenize(source: &str, file: &str) -> Result<Vec<Token>, LexerError> {
    LexicalAnalyzer::new().tokenize(source, file)
}

/// Tokenize with custom runtime preferences (limits remain compile-time)
pub fn tokenize_with_preferences(
    source: &str,
    file: &str,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, LexerError> {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source, file)
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Verify every lexical error code is registered (for system startup)
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::UNTERMINATED_COMMENT,
        codes::lexical::UNTERMINATED_STRING,
        codes::lexical::IDENTIFIER_TOO_LONG,
        codes::lexical::STRING_TOO_LARGE,
        codes::lexical::COMMENT_TOO_LONG,
        codes::lexical::TOKEN_LIMIT_EXCEEDED,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical security limits initialized",
        "max_string_size" => MAX_STRING_SIZE,
        "max_identifier_length" => MAX_IDENTIFIER_LENGTH,
        "max_comment_length" => MAX_COMMENT_LENGTH,
        "max_token_count" => MAX_TOKEN_COUNT
    );

    Ok(())
}
