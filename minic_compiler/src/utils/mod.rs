//! Shared source-location primitives used by the lexer, token stream and
//! grammar analyzer.

pub mod span;

pub use span::{Position, SourceMap, Span};
