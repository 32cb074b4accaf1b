//! Token data model and the cursor-based token stream
//!
//! The lexer produces [`Token`]s in source order; the grammar analyzer
//! consumes them through a [`TokenStream`], which only ever moves forward.
//!
//! ## Token kinds
//!
//! The closed set of categories is [`TokenKind`]. Braces and parentheses get
//! dedicated kinds because the grammar analyzer matches on them directly;
//! brackets and `;` are generic `PUNCTUATOR`s. Type-specifier keywords such
//! as `int` or `struct` are `DATA_TYPE`, every other reserved word is
//! `KEYWORD`.
//!
//! ## Comments
//!
//! Comments survive lexing as `COMMENT` tokens so the token sequence stays a
//! faithful view of the input. [`TokenStream::without_comments`] builds the
//! view the grammar analyzer reads.

pub mod token;
pub mod token_stream;

pub use token::{SourceLocation, Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamBuilder};

pub use crate::utils::{Position, SourceMap, Span};
