//! Abstract syntax tree skeleton
//!
//! The tree stops at block level: a function body records its nested
//! brace pairs and nothing about the statements between them.

pub mod nodes;
pub mod program;
