//! Non-fatal analysis findings and the mode that decides whether they are kept

use crate::logging::{codes, Code};
use crate::tokens::SourceLocation;
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the grammar analyzer treats input it cannot recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Skip unrecognized constructs silently and accept unterminated blocks
    #[default]
    Lenient,
    /// Record a diagnostic for every skipped construct and fail on
    /// unterminated blocks
    Strict,
}

impl AnalysisMode {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// A reported finding: what kind, where, and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: Code,
    pub message: String,
    pub location: SourceLocation,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(code: Code, message: impl Into<String>, location: SourceLocation, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            location,
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.code.as_str().starts_with('E')
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_error() { "error" } else { "warning" };
        write!(
            f,
            "{}[{}]: {} at {}",
            kind, self.code, self.message, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(AnalysisMode::from_strict_flag(true), AnalysisMode::Strict);
        assert_eq!(AnalysisMode::from_strict_flag(false), AnalysisMode::Lenient);
        assert!(!AnalysisMode::default().is_strict());
    }

    #[test]
    fn test_diagnostic_display_and_json() {
        let diagnostic = Diagnostic::new(
            codes::warnings::SKIPPED_CONSTRUCT,
            "Data type 'int' does not start a function definition",
            SourceLocation::new(Arc::from("main.c"), 3, 1),
            Span::dummy(),
        );
        assert!(!diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "warning[W040]: Data type 'int' does not start a function definition at main.c:3:1"
        );

        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["code"], "W040");
        assert_eq!(json["location"]["line"], 3);
    }
}
