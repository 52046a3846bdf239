//! Configuration module for iphone-monitor.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.iphone-monitor.yaml` file in your project root or
//! `~/.config/iphone-monitor/`:
//!
//! ```yaml
//! feed:
//!   source: https://example.github.io/iphone-monitor/
//! defaults:
//!   carriers: [au, docomo]
//!   pricing_mode: one-time
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_FEED_SOURCE, DEFAULT_THEME, VALID_THEMES};
pub use types::{
    AppConfig, BrowseConfig, ConfigOverrides, FeedConfig, OptionsConfig, OutputConfig, SelectionDefaults,
    TuiConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, user_config_dir,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in
/// `.iphone-monitor.yaml` and can be used by editors for completion.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::CatalogError::config(format!("schema serialization failed: {e}")))
}
