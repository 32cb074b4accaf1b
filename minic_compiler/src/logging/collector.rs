//! Per-file collection of errors and warnings with cargo-style output

use super::events::LogEvent;
use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_LOG_EVENTS_PER_FILE};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// The compilation unit currently being processed on this thread
#[derive(Debug, Clone)]
pub struct FileProcessingContext {
    pub file_path: PathBuf,
    pub file_id: usize,
}

impl FileProcessingContext {
    pub fn new(file_path: PathBuf, file_id: usize) -> Self {
        Self { file_path, file_id }
    }
}

#[derive(Debug, Default)]
struct FileEvents {
    events: Vec<LogEvent>,
    dropped: usize,
}

/// Thread-safe collector grouping errors and warnings by source file
#[derive(Debug, Default)]
pub struct ErrorCollector {
    files: Mutex<BTreeMap<PathBuf, FileEvents>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, FileEvents>> {
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Keep an error or warning for the summary; other levels are ignored
    ///
    /// Past the per-file or global limit events are only counted.
    pub fn record_event(&self, file_path: &Path, event: LogEvent) {
        if !event.is_error() && !event.is_warning() {
            return;
        }

        let mut files = self.lock();
        let total: usize = files.values().map(|f| f.events.len()).sum();
        let entry = files.entry(file_path.to_path_buf()).or_default();

        if entry.events.len() < MAX_LOG_EVENTS_PER_FILE && total < LOG_BUFFER_SIZE {
            entry.events.push(event);
        } else {
            entry.dropped += 1;
        }
    }

    /// Render collected events grouped by file, followed by totals
    pub fn format_cargo_style(&self) -> String {
        let files = self.lock();
        let mut output = String::new();
        let mut total_errors = 0;
        let mut total_warnings = 0;

        for (file_path, file) in files.iter() {
            if file.events.is_empty() && file.dropped == 0 {
                continue;
            }

            output.push_str(&format!("Checking {}...\n", file_path.display()));

            let errors = file.events.iter().filter(|e| e.is_error());
            let warnings = file.events.iter().filter(|e| e.is_warning());

            for event in errors {
                total_errors += 1;
                push_headline(&mut output, "error", file_path, event);
                output.push_str(&format!(
                    "  = severity: {}, category: {}\n",
                    super::codes::get_severity(event.code.as_str()).as_str(),
                    event.category()
                ));
                push_context(&mut output, event);

                let action = super::codes::get_action(event.code.as_str());
                if action != "No specific action available" {
                    output.push_str(&format!("  = help: {}\n", action));
                }
            }

            for event in warnings {
                total_warnings += 1;
                push_headline(&mut output, "warning", file_path, event);
                push_context(&mut output, event);
            }

            if file.dropped > 0 {
                output.push_str(&format!("  = note: {} more events not shown\n", file.dropped));
            }

            output.push('\n');
        }

        if total_errors > 0 {
            output.push_str(&format!("Total errors: {}\n", total_errors));
        }
        if total_warnings > 0 {
            output.push_str(&format!("Total warnings: {}\n", total_warnings));
        }

        output
    }
}

fn push_headline(output: &mut String, label: &str, file_path: &Path, event: &LogEvent) {
    let location = event
        .span
        .as_ref()
        .map(|s| format!(" --> {}:{}", file_path.display(), s.start()))
        .unwrap_or_default();

    output.push_str(&format!(
        "{}[{}]: {}{}\n",
        label, event.code, event.message, location
    ));
}

fn push_context(output: &mut String, event: &LogEvent) {
    for (key, value) in &event.context {
        if key != "file" && key != "file_id" {
            output.push_str(&format!("  = {}: {}\n", key, value));
        }
    }
}
