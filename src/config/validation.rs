//! Configuration validation for iphone-monitor.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::VALID_THEMES;
use super::types::{AppConfig, FeedConfig, OutputConfig, SelectionDefaults, TuiConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.feed.validate());
        errors.extend(self.defaults.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for FeedConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(source) = &self.source
            && source.trim().is_empty()
        {
            errors.push(ConfigError {
                field: "feed.source".to_string(),
                message: "Feed source must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for SelectionDefaults {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut seen = std::collections::BTreeSet::new();
        for carrier in &self.carriers {
            if !seen.insert(carrier) {
                errors.push(ConfigError {
                    field: "defaults.carriers".to_string(),
                    message: format!("Carrier '{carrier}' is listed more than once"),
                });
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.format == ReportFormat::Tui
            && let Some(file) = &self.file
        {
            errors.push(ConfigError {
                field: "output.file".to_string(),
                message: format!(
                    "The TUI cannot be written to a file ({})",
                    file.display()
                ),
            });
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Carrier;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_theme() {
        let config = TuiConfig {
            theme: "solarized".to_string(),
            ..TuiConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
    }

    #[test]
    fn test_duplicate_carriers() {
        let defaults = SelectionDefaults {
            carriers: vec![Carrier::Au, Carrier::Docomo, Carrier::Au],
            ..SelectionDefaults::default()
        };
        let errors = defaults.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("au"));
    }

    #[test]
    fn test_empty_carrier_list_is_allowed() {
        let defaults = SelectionDefaults {
            carriers: Vec::new(),
            ..SelectionDefaults::default()
        };
        assert!(defaults.is_valid());
    }

    #[test]
    fn test_tui_with_output_file() {
        let output = OutputConfig {
            format: ReportFormat::Tui,
            file: Some(PathBuf::from("out.txt")),
            no_color: false,
        };
        assert!(!output.is_valid());
    }

    #[test]
    fn test_blank_feed_source() {
        let feed = FeedConfig {
            source: Some("  ".to_string()),
        };
        assert_eq!(feed.validate()[0].field, "feed.source");
    }

    #[test]
    fn test_app_config_collects_all_errors() {
        let config = AppConfig {
            feed: FeedConfig {
                source: Some(String::new()),
            },
            tui: TuiConfig {
                theme: "neon".to_string(),
                mouse_enabled: false,
            },
            ..AppConfig::default()
        };
        assert_eq!(config.validate().len(), 2);
    }
}
