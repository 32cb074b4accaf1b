//! Reference values for the compile-time limits.
//!
//! The constants actually used by the compiler are generated by `build.rs`
//! from `config/<profile>.toml` and exposed as `config::compile_time`. This
//! module mirrors the development profile so the meaning of every knob is
//! documented in one place.

pub mod compile_time {
    pub mod lexical {
        /// Maximum string literal size in bytes, quotes included (1MB)
        /// SECURITY: Prevents memory exhaustion via enormous string literals
        pub const MAX_STRING_SIZE: usize = 1_048_576;

        /// Maximum identifier length (255 characters)
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum comment length in bytes, delimiters included
        /// SECURITY: Limits resource consumption per comment
        pub const MAX_COMMENT_LENGTH: usize = 1_048_576;

        /// Maximum number of tokens allowed in a single compilation unit
        /// SECURITY: Prevents DoS via token explosion
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    pub mod syntax {
        /// Maximum brace nesting depth accepted by the grammar analyzer
        /// SECURITY: Bounds call-stack recursion on adversarial input
        pub const MAX_BLOCK_DEPTH: usize = 256;

        /// Maximum number of diagnostics retained per analysis
        /// RESOURCE: Controls memory usage for strict-mode reporting
        pub const MAX_DIAGNOSTICS: usize = 1000;
    }

    pub mod logging {
        /// Buffer size for in-memory log storage
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log events collected per file
        pub const MAX_LOG_EVENTS_PER_FILE: usize = 1000;

        /// Security floor for the minimum log level (0=Error, 1=Warning, 2=Info)
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 1;
    }
}
