//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, summary otherwise
    #[default]
    Auto,
    /// Interactive TUI display
    Tui,
    /// Structured JSON output
    Json,
    /// Card-style summary output
    Summary,
    /// Aligned table for terminals
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Report metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Feed the report was derived from
    pub source: Option<String>,
}

/// Configuration for report generation
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Report configuration naming the feed source.
    #[must_use]
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                source: Some(source.into()),
            },
        }
    }
}
