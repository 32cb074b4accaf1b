//! Logging macros taking `Code` values and Display context pairs
//!
//! Context values are formatted with `to_string` at the call site and passed
//! as a slice of `(key, value)` pairs.

/// Log error with a code, optional span, and `"key" => value` context
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_error_with_context(
            $code,
            $message,
            Some($span),
            &[$(($key, $value.to_string())),*],
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_error_with_context(
            $code,
            $message,
            None,
            &[$(($key, $value.to_string())),*],
        )
    };
}

/// Log a coded warning; recorded in the per-file summary like errors
#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr, span = $span:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_warning_with_context(
            $code,
            $message,
            Some($span),
            &[$(($key, $value.to_string())),*],
        )
    };

    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_warning_with_context(
            $code,
            $message,
            None,
            &[$(($key, $value.to_string())),*],
        )
    };
}

#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_success_with_context(
            $code,
            $message,
            &[$(($key, $value.to_string())),*],
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::logging::log_info_with_context($message, &[$(($key, $value.to_string())),*])
    };
}

/// Debug logging; context values are only formatted when debug output is on
#[macro_export]
macro_rules! log_debug {
    ($message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        if $crate::logging::config::min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::log_debug_with_context($message, &[$(($key, $value.to_string())),*])
        }
    };
}
