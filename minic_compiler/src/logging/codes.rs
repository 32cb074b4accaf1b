//! Consolidated error codes and classification system
//!
//! Single source of truth for all diagnostic codes, their metadata, and
//! classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Code {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// Source input error codes
pub mod input {
    use super::Code;

    pub const FILE_READ_ERROR: Code = Code::new("E010");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const UNTERMINATED_COMMENT: Code = Code::new("E020");
    pub const UNTERMINATED_STRING: Code = Code::new("E021");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E023");
    pub const STRING_TOO_LARGE: Code = Code::new("E024");
    pub const COMMENT_TOO_LONG: Code = Code::new("E026");
    pub const TOKEN_LIMIT_EXCEEDED: Code = Code::new("E027");
}

/// Grammar analysis error codes
pub mod syntax {
    use super::Code;

    pub const EMPTY_TOKEN_STREAM: Code = Code::new("E040");
    pub const UNMATCHED_BLOCK_DELIMITER: Code = Code::new("E041");
    pub const DUPLICATE_FUNCTION: Code = Code::new("E042");
    pub const MAX_BLOCK_DEPTH: Code = Code::new("E044");
}

/// Grammar analysis warning codes (lenient-mode diagnostics)
pub mod warnings {
    use super::Code;

    pub const SKIPPED_CONSTRUCT: Code = Code::new("W040");
    pub const UNTERMINATED_BLOCK: Code = Code::new("W041");
    pub const FUNCTION_REDEFINED: Code = Code::new("W042");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const ANALYSIS_COMPLETE: Code = Code::new("I040");
    pub const FUNCTION_RECOGNIZED: Code = Code::new("I041");
    pub const COMPILATION_COMPLETE: Code = Code::new("I050");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // Input errors
            ErrorMetadata::new(
                "E010",
                "Input",
                Severity::High,
                "Source file could not be read",
                "Verify the path exists and is readable UTF-8 text",
            ),
            // Lexical errors
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                "Multi-line comment is never closed",
                "Add the closing */ delimiter",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                "String literal is never closed",
                "Add the closing double quote",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                "Identifier exceeds the configured maximum length",
                "Shorten the identifier",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                "String literal exceeds the configured maximum size",
                "Split the literal or raise max_string_size",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::Medium,
                "Comment exceeds the configured maximum length",
                "Shorten the comment or raise max_comment_length",
            ),
            ErrorMetadata::new(
                "E027",
                "Lexical",
                Severity::High,
                "Compilation unit produces too many tokens",
                "Split the source or raise max_token_count",
            ),
            // Syntax errors
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Low,
                "Token stream contains no analyzable tokens",
                "Provide at least one function definition",
            ),
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::High,
                "Opening curly brace has no matching closing brace",
                "Add the missing }",
            ),
            ErrorMetadata::new(
                "E042",
                "Syntax",
                Severity::Medium,
                "Function name is defined more than once",
                "Rename or remove one of the definitions",
            ),
            ErrorMetadata::new(
                "E044",
                "Syntax",
                Severity::High,
                "Block nesting exceeds the configured maximum depth",
                "Reduce brace nesting or raise max_block_depth",
            ),
            // Warnings
            ErrorMetadata::new(
                "W040",
                "Syntax",
                Severity::Low,
                "Top-level construct was skipped",
                "Only function definitions are recognized at top level",
            ),
            ErrorMetadata::new(
                "W041",
                "Syntax",
                Severity::Medium,
                "Block reached end of input without a closing brace",
                "Add the missing } or enable strict mode to reject the input",
            ),
            ErrorMetadata::new(
                "W042",
                "Syntax",
                Severity::Low,
                "Later function definition replaced an earlier one",
                "Rename one of the functions",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from a code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_is_registered() {
        let codes = [
            input::FILE_READ_ERROR,
            lexical::UNTERMINATED_COMMENT,
            lexical::UNTERMINATED_STRING,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::STRING_TOO_LARGE,
            lexical::COMMENT_TOO_LONG,
            lexical::TOKEN_LIMIT_EXCEEDED,
            syntax::EMPTY_TOKEN_STREAM,
            syntax::UNMATCHED_BLOCK_DELIMITER,
            syntax::DUPLICATE_FUNCTION,
            syntax::MAX_BLOCK_DEPTH,
            warnings::SKIPPED_CONSTRUCT,
            warnings::UNTERMINATED_BLOCK,
            warnings::FUNCTION_REDEFINED,
        ];

        for code in codes {
            let metadata = get_error_metadata(code.as_str());
            assert!(metadata.is_some(), "{} missing from registry", code);
            assert_eq!(metadata.map(|m| m.code), Some(code.as_str()));
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_severity("Z999"), Severity::Medium);
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_action("Z999"), "No specific action available");
        assert_eq!(get_category("Z999"), "Unknown");
    }

    #[test]
    fn test_lexical_termination_errors_are_high_severity() {
        assert_eq!(get_severity(lexical::UNTERMINATED_COMMENT.as_str()), Severity::High);
        assert_eq!(get_severity(lexical::UNTERMINATED_STRING.as_str()), Severity::High);
        assert_eq!(get_category(lexical::UNTERMINATED_STRING.as_str()), "Lexical");
    }

    #[test]
    fn test_skipped_construct_metadata() {
        assert_eq!(get_severity(warnings::SKIPPED_CONSTRUCT.as_str()), Severity::Low);
        assert_eq!(get_category(warnings::SKIPPED_CONSTRUCT.as_str()), "Syntax");
        assert_eq!(
            get_description(warnings::SKIPPED_CONSTRUCT.as_str()),
            "Top-level construct was skipped"
        );
    }
}
