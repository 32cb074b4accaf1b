//! Global logging for the minic compiler
//!
//! One process-wide logging service and error collector, a thread-local file
//! context that tags events with the compilation unit being processed, and
//! the `log_*!` macros.

pub mod codes;
pub mod collector;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use crate::utils::Span;
use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::OnceLock;

pub use codes::Code;
pub use collector::{ErrorCollector, FileProcessingContext};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<LoggingService> = OnceLock::new();
static GLOBAL_ERROR_COLLECTOR: OnceLock<ErrorCollector> = OnceLock::new();

thread_local! {
    static FILE_CONTEXT: RefCell<Option<FileProcessingContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from environment-derived preferences
pub fn init_global_logging() -> Result<(), String> {
    init_global_logging_with_preferences(LoggingPreferences::default())
}

/// Initialize global logging; fails if logging is already initialized
pub fn init_global_logging_with_preferences(
    preferences: LoggingPreferences,
) -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;
    config::init_runtime_preferences(preferences)?;

    GLOBAL_LOGGER
        .set(LoggingService::from_preferences())
        .map_err(|_| "Global logger already initialized")?;
    GLOBAL_ERROR_COLLECTOR
        .set(ErrorCollector::new())
        .map_err(|_| "Global error collector already initialized")?;

    log_success_with_context(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
        &[],
    );

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some() && GLOBAL_ERROR_COLLECTOR.get().is_some()
}

// ============================================================================
// FILE CONTEXT
// ============================================================================

/// Run `f` with events tagged with, and collected under, `file_path`
pub fn with_file_context<F, R>(file_path: PathBuf, file_id: usize, f: F) -> R
where
    F: FnOnce() -> R,
{
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(FileProcessingContext::new(file_path, file_id));
    });
    let result = f();
    FILE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
    result
}

fn current_file_context() -> Option<FileProcessingContext> {
    FILE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(mut event: LogEvent, span: Option<Span>, context: &[(&str, String)]) {
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    let file_ctx = current_file_context();
    if let Some(file_ctx) = &file_ctx {
        if config::include_file_context() {
            event = event
                .with_context("file", &file_ctx.file_path.display().to_string())
                .with_context("file_id", &file_ctx.file_id.to_string());
        }
    }

    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.log_event(&event);
    }

    if let (Some(file_ctx), Some(collector)) = (file_ctx, GLOBAL_ERROR_COLLECTOR.get()) {
        collector.record_event(&file_ctx.file_path, event);
    }
}

/// Used by `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: &[(&str, String)],
) {
    dispatch(LogEvent::error(code, message), span, context);
}

/// Used by `log_warning!`
pub fn log_warning_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: &[(&str, String)],
) {
    dispatch(LogEvent::warning(code, message), span, context);
}

/// Used by `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: &[(&str, String)]) {
    dispatch(LogEvent::success(code, message), None, context);
}

/// Used by `log_info!`
pub fn log_info_with_context(message: &str, context: &[(&str, String)]) {
    dispatch(LogEvent::info(message), None, context);
}

/// Used by `log_debug!`
pub fn log_debug_with_context(message: &str, context: &[(&str, String)]) {
    dispatch(LogEvent::debug(message), None, context);
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Cargo-style summary of everything collected so far
pub fn cargo_style_summary() -> Option<String> {
    GLOBAL_ERROR_COLLECTOR
        .get()
        .map(ErrorCollector::format_cargo_style)
}

/// Print the cargo-style summary to stderr when enabled and non-empty
pub fn print_cargo_style_summary() {
    if !config::use_cargo_style_output() {
        return;
    }
    if let Some(summary) = cargo_style_summary() {
        if !summary.is_empty() {
            eprint!("{}", summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_logging_initializes_once() {
        if init_global_logging().is_ok() {
            assert!(is_initialized());
        }
        assert!(init_global_logging().is_err());
    }

    #[test]
    fn test_with_file_context() {
        let file_path = PathBuf::from("nested.c");
        assert!(current_file_context().is_none());

        let result = with_file_context(file_path.clone(), 2, || {
            let context = current_file_context();
            assert_eq!(context.as_ref().map(|c| c.file_id), Some(2));
            assert_eq!(context.map(|c| c.file_path), Some(file_path.clone()));
            42
        });

        assert_eq!(result, 42);
        assert!(current_file_context().is_none());
    }

    #[test]
    fn test_errors_collected_under_file_context() {
        let _ = init_global_logging();
        // Another test may be midway through initialization
        while !is_initialized() {
            std::thread::yield_now();
        }
        let path = PathBuf::from("collected_here.c");

        with_file_context(path, 7, || {
            log_error_with_context(
                codes::lexical::UNTERMINATED_STRING,
                "string never closes",
                None,
                &[("marker", "collected_here".to_string())],
            );
        });

        let summary = cargo_style_summary().unwrap_or_default();
        assert!(summary.contains("Checking collected_here.c..."));
        assert!(summary.contains("error[E021]: string never closes"));
        assert!(summary.contains("= marker: collected_here"));
    }
}
