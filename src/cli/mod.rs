//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod browse;
mod options;

pub use browse::{expand_pages, run_browse};
pub use options::run_options;

// Re-export config types used by handlers
pub use crate::config::{BrowseConfig, OptionsConfig};
