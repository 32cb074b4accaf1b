//! Grammar data model for the C-like source language

pub mod ast;

// Re-export AST types
pub use ast::nodes::*;
pub use ast::program::{DuplicatePolicy, InsertOutcome, Program};
