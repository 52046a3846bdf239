//! Configuration types for iphone-monitor operations.
//!
//! Provides the file-backed [`AppConfig`] plus the resolved per-command
//! configurations handed to the CLI handlers.

use crate::catalog::{FilterSelection, PricingMode, SortKey};
use crate::model::Carrier;
use crate::parsers::FeedSource;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from config files.
///
/// CLI arguments are layered on top with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where the listing feed comes from
    pub feed: FeedConfig,
    /// Initial filter selection
    pub defaults: SelectionDefaults,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Feed location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FeedConfig {
    /// File path, directory, or http(s) URL of the feed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Filter selection applied when a session starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SelectionDefaults {
    /// Carriers selected initially
    pub carriers: Vec<Carrier>,
    /// Compare monthly installments or one-time prices
    pub pricing_mode: PricingMode,
    /// Initial sort order
    pub sort: SortKey,
}

impl SelectionDefaults {
    /// The filter selection these defaults describe.
    #[must_use]
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection {
            carriers: self.carriers.iter().copied().collect(),
            pricing_mode: self.pricing_mode,
            sort_key: self.sort,
            ..FilterSelection::default()
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// TUI-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None` means the flag was absent; any `Some` value wins over the config
/// file, even when it equals the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub feed: Option<String>,
    pub carriers: Option<Vec<Carrier>>,
    pub pricing_mode: Option<PricingMode>,
    pub sort: Option<SortKey>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    /// `--no-color` can only switch colors off
    pub no_color: bool,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the `browse` command
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    /// Resolved feed location
    pub source: FeedSource,
    /// Initial filter selection
    pub selection: FilterSelection,
    /// Number of "show more" steps applied before rendering
    pub pages: usize,
    /// Output configuration
    pub output: OutputConfig,
    /// TUI configuration
    pub tui: TuiConfig,
    /// Suppress informational logging
    pub quiet: bool,
}

/// Configuration for the `options` command
#[derive(Debug, Clone)]
pub struct OptionsConfig {
    /// Resolved feed location
    pub source: FeedSource,
    /// Output configuration
    pub output: OutputConfig,
    /// Suppress informational logging
    pub quiet: bool,
}
