//! Error types for grammar analysis
//!
//! Only conditions that stop analysis of a compilation unit are errors.
//! Skipped constructs and an empty stream are reported as diagnostics, see
//! [`Diagnostic`].
//!
//! [`Diagnostic`]: crate::syntax::Diagnostic

use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unmatched block delimiter: '{delimiter}' opened at {span} is never closed")]
    UnmatchedBlockDelimiter { delimiter: String, span: Span },

    #[error("Maximum block depth {max_depth} exceeded at {span}")]
    MaxBlockDepth { max_depth: usize, span: Span },

    #[error("Duplicate function '{name}' at {span}")]
    DuplicateFunction { name: String, span: Span },
}

impl SyntaxError {
    pub fn unmatched_delimiter(delimiter: &str, span: Span) -> Self {
        Self::UnmatchedBlockDelimiter {
            delimiter: delimiter.to_string(),
            span,
        }
    }

    pub fn max_block_depth(max_depth: usize, span: Span) -> Self {
        Self::MaxBlockDepth { max_depth, span }
    }

    pub fn duplicate_function(name: &str, span: Span) -> Self {
        Self::DuplicateFunction {
            name: name.to_string(),
            span,
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnmatchedBlockDelimiter { .. } => codes::syntax::UNMATCHED_BLOCK_DELIMITER,
            Self::MaxBlockDepth { .. } => codes::syntax::MAX_BLOCK_DEPTH,
            Self::DuplicateFunction { .. } => codes::syntax::DUPLICATE_FUNCTION,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnmatchedBlockDelimiter { span, .. }
            | Self::MaxBlockDepth { span, .. }
            | Self::DuplicateFunction { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_error_code_mapping() {
        let span = Span::point(Position::start());

        assert_eq!(
            SyntaxError::unmatched_delimiter("{", span).error_code().as_str(),
            "E041"
        );
        assert_eq!(
            SyntaxError::duplicate_function("f", span).error_code().as_str(),
            "E042"
        );
        assert_eq!(SyntaxError::max_block_depth(4, span).error_code().as_str(), "E044");
    }

    #[test]
    fn test_messages_carry_location() {
        let span = Span::new(Position::new(12, 2, 3), Position::new(13, 2, 4));
        let error = SyntaxError::unmatched_delimiter("{", span);

        assert_eq!(error.span(), span);
        assert_eq!(
            error.to_string(),
            "Unmatched block delimiter: '{' opened at 2:3-4 is never closed"
        );
    }
}
