//! Compilation pipeline: source text -> token sequence -> program skeleton
//!
//! A lexical error is fatal for the compilation unit; no program is
//! produced for a file that did not tokenize cleanly.

mod error;
mod output;

pub use error::PipelineError;
pub use output::CompilationOutput;

use crate::config::runtime::RuntimeConfig;
use crate::lexical::LexicalAnalyzer;
use crate::logging::{self, codes};
use crate::tokens::TokenStream;
use crate::utils::SourceMap;
use crate::{log_error, log_info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Compile an in-memory source buffer with default preferences
pub fn compile_source(source: &str, file: &str) -> Result<CompilationOutput, PipelineError> {
    compile_source_with_config(source, file, &RuntimeConfig::default())
}

pub fn compile_source_with_config(
    source: &str,
    file: &str,
    config: &RuntimeConfig,
) -> Result<CompilationOutput, PipelineError> {
    logging::with_file_context(PathBuf::from(file), 0, || run(source, file, config))
}

/// Read and compile one file with default preferences
pub fn compile_file(path: &Path) -> Result<CompilationOutput, PipelineError> {
    compile_file_with_config(path, &RuntimeConfig::default())
}

pub fn compile_file_with_config(
    path: &Path,
    config: &RuntimeConfig,
) -> Result<CompilationOutput, PipelineError> {
    logging::with_file_context(path.to_path_buf(), 0, || {
        let source = read_source(path)?;
        run(&source, &path.display().to_string(), config)
    })
}

pub fn read_source(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| {
        log_error!(codes::input::FILE_READ_ERROR, "Failed to read source file",
            "file" => path.display(),
            "error" => source
        );
        PipelineError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn run(
    source: &str,
    file: &str,
    config: &RuntimeConfig,
) -> Result<CompilationOutput, PipelineError> {
    let start_time = Instant::now();
    log_info!("Starting compilation", "file" => file, "bytes" => source.len());

    // Stage 1: Lexical analysis
    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let tokens = TokenStream::new(analyzer.tokenize(source, file)?);

    // Stage 2: Grammar analysis
    let analysis = crate::syntax::analyze(&tokens, &config.analyzer)?;

    let output = CompilationOutput {
        file: file.to_string(),
        tokens: tokens.into_tokens(),
        program: analysis.program,
        diagnostics: analysis.diagnostics,
        dropped_diagnostics: analysis.dropped_diagnostics,
        metrics: analyzer.metrics().clone(),
        duration: start_time.elapsed(),
    };
    output.log_success();

    Ok(output)
}

/// Render a pipeline error with a source snippet when it carries a span,
/// followed by the recommended fix for its code
pub fn render_error(error: &PipelineError, source: &str, file: &str) -> String {
    let code = error.error_code();
    let mut rendered = match error.span() {
        Some(span) => {
            SourceMap::new(file, source).format_error(&span, code.as_str(), &error.to_string())
        }
        None => format!("error[{}]: {}\n", code, error),
    };

    if codes::get_error_metadata(code.as_str()).is_some() {
        rendered.push_str(&format!("  = help: {}\n", codes::get_action(code.as_str())));
    }

    rendered
}
