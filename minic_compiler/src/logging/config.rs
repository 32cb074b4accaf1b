//! Logging preferences bounded by compile-time limits
//!
//! Buffer sizes and the security floor come from the build profile. Level,
//! output format and file context come from runtime preferences, which are
//! installed once by `init_global_logging_with_preferences`.

use super::events::LogLevel;
use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Installed preferences, or the environment defaults before initialization
fn preferences() -> &'static LoggingPreferences {
    static DEFAULTS: OnceLock<LoggingPreferences> = OnceLock::new();
    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| DEFAULTS.get_or_init(LoggingPreferences::default))
}

/// Level below which events are never filtered out
fn security_floor() -> LogLevel {
    match SECURITY_MIN_LOG_LEVEL {
        0 => LogLevel::Error,
        1 => LogLevel::Warning,
        _ => LogLevel::Info,
    }
}

/// Most verbose level to emit; never quieter than the security floor
pub fn min_log_level() -> LogLevel {
    preferences()
        .min_log_level
        .to_events_log_level()
        .max(security_floor())
}

pub fn use_structured_logging() -> bool {
    preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    preferences().enable_console_logging
}

pub fn use_cargo_style_output() -> bool {
    preferences().enable_cargo_style_output
}

pub fn include_file_context() -> bool {
    preferences().include_file_context
}

pub fn validate_config() -> Result<(), String> {
    if !(100..=100_000).contains(&LOG_BUFFER_SIZE) {
        return Err(format!("Log buffer size out of range: {}", LOG_BUFFER_SIZE));
    }

    if MAX_LOG_EVENTS_PER_FILE > LOG_BUFFER_SIZE {
        return Err("Max log events per file exceeds total buffer size".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_min_level_respects_security_floor() {
        assert!(min_log_level() >= security_floor());
        assert!(security_floor() >= LogLevel::Error);
    }
}
