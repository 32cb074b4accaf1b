// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{Block, FunctionDefinition, FunctionHeader, Program, VariableDeclaration};
pub use pipeline::{compile_file, compile_source, CompilationOutput, PipelineError};
pub use tokens::{Token, TokenKind, TokenStream};
