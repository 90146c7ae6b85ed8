//! Exit codes for notesystem
//!
//! Findings in documents are not a failure of the tool, so a check run that reports
//! errors still exits with `SUCCESS`.

/// Success - The requested mode ran to completion
pub const SUCCESS: i32 = 0;

/// Tool error - Missing input path, configuration error or a failed mode
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
