use crate::grammar::Program;
use crate::lexical::LexicalMetrics;
use crate::logging::codes;
use crate::syntax::Diagnostic;
use crate::tokens::Token;
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
struct OutputSummary<'a> {
    file: &'a str,
    program: &'a Program,
    diagnostics: &'a [Diagnostic],
    metrics: &'a LexicalMetrics,
}

/// Everything one compilation unit produced
#[derive(Debug, Clone, Serialize)]
pub struct CompilationOutput {
    pub file: String,
    /// Full token sequence, comments included
    pub tokens: Vec<Token>,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
    pub dropped_diagnostics: usize,
    pub metrics: LexicalMetrics,
    #[serde(skip)]
    pub duration: Duration,
}

impl CompilationOutput {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn function_count(&self) -> usize {
        self.program.function_count()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty() || self.dropped_diagnostics > 0
    }

    /// Program, diagnostics and metrics as pretty JSON (tokens omitted)
    pub fn summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&OutputSummary {
            file: &self.file,
            program: &self.program,
            diagnostics: &self.diagnostics,
            metrics: &self.metrics,
        })
    }

    pub fn log_success(&self) {
        crate::log_success!(
            codes::success::COMPILATION_COMPLETE,
            "Compilation unit processed",
            "file" => self.file,
            "tokens" => self.token_count(),
            "functions" => self.function_count(),
            "diagnostics" => self.diagnostics.len(),
            "duration_ms" => format!("{:.2}", self.duration.as_secs_f64() * 1000.0)
        );
    }
}
