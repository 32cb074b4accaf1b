//! Configuration module for the minic compiler
//! Automatically uses generated constants from TOML configuration

// Generated at compile time from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

// Documented reference values and runtime preferences
pub mod constants;
pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("MINIC_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("MINIC_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(compile_time::syntax::MAX_BLOCK_DEPTH >= 1);
        assert!(compile_time::lexical::MAX_IDENTIFIER_LENGTH > 0);
        assert!(
            compile_time::logging::MAX_LOG_EVENTS_PER_FILE
                <= compile_time::logging::LOG_BUFFER_SIZE
        );
    }

    #[test]
    fn test_source_info_names_profile() {
        let info = build_info::source_info();
        assert!(info.contains(build_info::profile()));
        assert!(info.ends_with(".toml"));
    }

    #[test]
    fn test_reference_values_match_development_profile() {
        if build_info::profile() != "development" {
            return;
        }
        assert_eq!(
            constants::compile_time::lexical::MAX_STRING_SIZE,
            compile_time::lexical::MAX_STRING_SIZE
        );
        assert_eq!(
            constants::compile_time::lexical::MAX_IDENTIFIER_LENGTH,
            compile_time::lexical::MAX_IDENTIFIER_LENGTH
        );
        assert_eq!(
            constants::compile_time::lexical::MAX_COMMENT_LENGTH,
            compile_time::lexical::MAX_COMMENT_LENGTH
        );
        assert_eq!(
            constants::compile_time::lexical::MAX_TOKEN_COUNT,
            compile_time::lexical::MAX_TOKEN_COUNT
        );
        assert_eq!(
            constants::compile_time::syntax::MAX_BLOCK_DEPTH,
            compile_time::syntax::MAX_BLOCK_DEPTH
        );
        assert_eq!(
            constants::compile_time::syntax::MAX_DIAGNOSTICS,
            compile_time::syntax::MAX_DIAGNOSTICS
        );
        assert_eq!(
            constants::compile_time::logging::LOG_BUFFER_SIZE,
            compile_time::logging::LOG_BUFFER_SIZE
        );
        assert_eq!(
            constants::compile_time::logging::SECURITY_MIN_LOG_LEVEL,
            compile_time::logging::SECURITY_MIN_LOG_LEVEL
        );
    }
}
