//! AST node definitions
//!
//! Every node is plain data with `serde` support so a recognized program
//! can be dumped as JSON. Spans are optional so nodes can be built by hand
//! in tests and tools.

use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed name such as a parameter (`int count`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub data_type: String,
    pub name: String,
}

impl VariableDeclaration {
    pub fn new(data_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.data_type, self.name)
    }
}

/// `return_type name ( parameters )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionHeader {
    pub name: String,
    /// Always empty today; parameter lists are not parsed
    pub parameters: Vec<VariableDeclaration>,
    pub return_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl FunctionHeader {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: return_type.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// C-style signature, e.g. `int main()`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        format!("{} {}({})", self.return_type, self.name, params.join(", "))
    }
}

/// A `{ ... }` region and the blocks nested directly inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub children: Vec<Block>,
    /// False when input ended before the closing brace (lenient mode only)
    pub terminated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Block {
    /// An empty, properly closed block
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            terminated: true,
            span: None,
        }
    }

    pub fn with_children(children: Vec<Block>) -> Self {
        Self {
            children,
            ..Self::new()
        }
    }

    /// Nesting depth of this block, counting itself (an empty block is 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Block::depth).max().unwrap_or(0)
    }

    /// Number of blocks nested anywhere below this one
    pub fn nested_block_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.nested_block_count())
            .sum()
    }

    /// True if this block and every nested block saw a closing brace
    pub fn is_well_formed(&self) -> bool {
        self.terminated && self.children.iter().all(Block::is_well_formed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub header: FunctionHeader,
    pub body: Block,
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionDefinition {
    pub fn new(header: FunctionHeader, body: Block) -> Self {
        Self { header, body }
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn return_type(&self) -> &str {
        &self.header.return_type
    }

    /// Span from the return type through the closing brace, when known
    pub fn span(&self) -> Option<Span> {
        match (self.header.span, self.body.span) {
            (Some(header), Some(body)) => Some(header.merge(body)),
            (header, body) => header.or(body),
        }
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function {} returning {}",
            self.header.name, self.header.return_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;

    #[test]
    fn test_block_depth_and_counts() {
        let flat = Block::new();
        assert_eq!(flat.depth(), 1);
        assert_eq!(flat.nested_block_count(), 0);

        let nested = Block::with_children(vec![
            Block::with_children(vec![Block::new()]),
            Block::new(),
        ]);
        assert_eq!(nested.depth(), 3);
        assert_eq!(nested.nested_block_count(), 3);
        assert!(nested.is_well_formed());
    }

    #[test]
    fn test_unterminated_child_is_not_well_formed() {
        let open = Block {
            terminated: false,
            ..Block::new()
        };
        let parent = Block::with_children(vec![open]);
        assert!(parent.terminated);
        assert!(!parent.is_well_formed());
    }

    #[test]
    fn test_header_signature_and_display() {
        let mut header = FunctionHeader::new("add", "int");
        assert_eq!(header.signature(), "int add()");

        header.parameters.push(VariableDeclaration::new("int", "a"));
        header.parameters.push(VariableDeclaration::new("int", "b"));
        assert_eq!(header.signature(), "int add(int a, int b)");

        let def = FunctionDefinition::new(FunctionHeader::new("main", "int"), Block::new());
        assert_eq!(def.to_string(), "Function main returning int");
    }

    #[test]
    fn test_definition_span_merges_header_and_body() {
        let header_span = Span::new(Position::new(0, 1, 1), Position::new(10, 1, 11));
        let body_span = Span::new(Position::new(11, 1, 12), Position::new(24, 1, 25));
        let def = FunctionDefinition::new(
            FunctionHeader::new("main", "int").with_span(header_span),
            Block {
                span: Some(body_span),
                ..Block::new()
            },
        );
        let span = def.span().unwrap();
        assert_eq!(span.start().offset, 0);
        assert_eq!(span.end().offset, 24);
    }

    #[test]
    fn test_nodes_serialize_without_missing_spans() {
        let def = FunctionDefinition::new(FunctionHeader::new("f", "void"), Block::new());
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["header"]["name"], "f");
        assert_eq!(json["header"]["return_type"], "void");
        assert!(json["header"].get("span").is_none());
        assert_eq!(json["body"]["terminated"], true);
    }
}
