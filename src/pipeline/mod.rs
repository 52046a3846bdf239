//! Pipeline orchestration shared by the CLI command handlers.
//!
//! load → session → render (report or TUI).

mod load;
mod output;

pub use load::{load_catalog_with_context, load_store};
pub use output::{OutputTarget, auto_detect_format, should_use_color, write_output};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success - at least one listing matched
    pub const SUCCESS: i32 = 0;
    /// The catalog loaded but nothing passed the filters
    pub const NO_RESULTS: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NO_RESULTS, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
