// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-kind token metrics
    pub collect_detailed_metrics: bool,

    /// Whether comment tokens count towards the token limit
    pub count_comments_towards_limit: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("MINIC_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            count_comments_towards_limit: env::var("MINIC_LEXICAL_COUNT_COMMENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var("MINIC_LEXICAL_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerPreferences {
    /// Report skipped constructs and unterminated blocks instead of ignoring them
    pub strict_mode: bool,

    /// Treat a second definition of the same function name as an error
    pub reject_duplicate_functions: bool,

    /// Maximum brace nesting depth (clamped to the compile-time ceiling)
    pub max_block_depth: usize,

    /// Whether to log each recognized function at debug level
    pub log_recognized_functions: bool,
}

impl Default for AnalyzerPreferences {
    fn default() -> Self {
        Self {
            strict_mode: env::var("MINIC_ANALYZER_STRICT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            reject_duplicate_functions: env::var("MINIC_ANALYZER_REJECT_DUPLICATES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            max_block_depth: env::var("MINIC_ANALYZER_MAX_BLOCK_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(super::compile_time::syntax::MAX_BLOCK_DEPTH),
            log_recognized_functions: env::var("MINIC_ANALYZER_LOG_FUNCTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl AnalyzerPreferences {
    /// Block depth limit actually enforced; never above the compile-time ceiling
    pub fn effective_max_block_depth(&self) -> usize {
        self.max_block_depth
            .clamp(1, super::compile_time::syntax::MAX_BLOCK_DEPTH)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to enable cargo-style error reporting
    pub enable_cargo_style_output: bool,

    /// Whether to include file context in log messages
    pub include_file_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("MINIC_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("MINIC_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("MINIC_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            enable_cargo_style_output: env::var("MINIC_LOGGING_CARGO_STYLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_file_context: env::var("MINIC_LOGGING_INCLUDE_FILE_CONTEXT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Errors raised while loading a runtime preferences file
#[derive(Debug, thiserror::Error)]
pub enum RuntimeConfigError {
    #[error("Failed to read preferences file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid preferences TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub analyzer: AnalyzerPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse preferences from TOML text; missing sections and keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, RuntimeConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load preferences from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, RuntimeConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "MINIC_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_COUNT_COMMENTS: &str = "MINIC_LEXICAL_COUNT_COMMENTS";
    pub const LEXICAL_INCLUDE_POSITIONS: &str = "MINIC_LEXICAL_INCLUDE_POSITIONS";

    // Analyzer
    pub const ANALYZER_STRICT: &str = "MINIC_ANALYZER_STRICT";
    pub const ANALYZER_REJECT_DUPLICATES: &str = "MINIC_ANALYZER_REJECT_DUPLICATES";
    pub const ANALYZER_MAX_BLOCK_DEPTH: &str = "MINIC_ANALYZER_MAX_BLOCK_DEPTH";
    pub const ANALYZER_LOG_FUNCTIONS: &str = "MINIC_ANALYZER_LOG_FUNCTIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "MINIC_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "MINIC_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "MINIC_LOGGING_MIN_LEVEL";
    pub const LOGGING_CARGO_STYLE: &str = "MINIC_LOGGING_CARGO_STYLE";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "MINIC_LOGGING_INCLUDE_FILE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_effective_block_depth_is_clamped() {
        let mut prefs = AnalyzerPreferences::default();
        prefs.max_block_depth = 0;
        assert_eq!(prefs.effective_max_block_depth(), 1);

        prefs.max_block_depth = usize::MAX;
        assert_eq!(
            prefs.effective_max_block_depth(),
            crate::config::compile_time::syntax::MAX_BLOCK_DEPTH
        );
    }

    #[test]
    fn test_runtime_config_from_partial_toml() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [analyzer]
            strict_mode = true
            reject_duplicate_functions = true
            max_block_depth = 8

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert!(config.analyzer.strict_mode);
        assert!(config.analyzer.reject_duplicate_functions);
        assert_eq!(config.analyzer.max_block_depth, 8);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_runtime_config_rejects_bad_toml() {
        let result = RuntimeConfig::from_toml_str("[analyzer\nstrict_mode = ");
        assert_matches!(result, Err(RuntimeConfigError::Parse(_)));
    }

    #[test]
    fn test_runtime_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "[lexical]\ncollect_detailed_metrics = false\n").unwrap();

        let config = RuntimeConfig::load(&path).unwrap();
        assert!(!config.lexical.collect_detailed_metrics);

        let missing = RuntimeConfig::load(&dir.path().join("absent.toml"));
        assert_matches!(missing, Err(RuntimeConfigError::Io { .. }));
    }
}
