//! Program root and the duplicate-definition policy

use crate::grammar::ast::nodes::FunctionDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What happens when a second function with an existing name is recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// The later definition replaces the earlier one
    #[default]
    Overwrite,
    /// The earlier definition is kept and the later one is refused
    Reject,
}

/// Result of [`Program::insert_function`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Carries the definition that was displaced
    Replaced(FunctionDefinition),
    /// Carries the refused definition; the program is unchanged
    Rejected(FunctionDefinition),
}

/// Root of the syntax tree: every recognized function, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    pub functions_by_name: BTreeMap<String, FunctionDefinition>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition under its name, resolving clashes with `policy`
    ///
    /// This is the only place definitions enter a program, so the
    /// duplicate rule lives here and nowhere else.
    pub fn insert_function(
        &mut self,
        definition: FunctionDefinition,
        policy: DuplicatePolicy,
    ) -> InsertOutcome {
        let name = definition.header.name.clone();
        match (self.functions_by_name.contains_key(&name), policy) {
            (true, DuplicatePolicy::Reject) => InsertOutcome::Rejected(definition),
            _ => match self.functions_by_name.insert(name, definition) {
                Some(previous) => InsertOutcome::Replaced(previous),
                None => InsertOutcome::Inserted,
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions_by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions_by_name.contains_key(name)
    }

    /// Function names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions_by_name.keys().map(String::as_str)
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.functions_by_name.values()
    }

    pub fn function_count(&self) -> usize {
        self.functions_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions_by_name.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
