//! Non-interactive renderers for catalog frames.
//!
//! - JSON: structured data for programmatic use
//! - Summary: card-style listing for shells
//! - Table: aligned tabular terminal output
//!
//! Reporters only consume [`RenderFrame`]s and [`CatalogOptions`]; they
//! never touch the derivation pipeline directly.

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::catalog::{CatalogOptions, RenderFrame};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::CatalogError {
    fn from(err: ReportError) -> Self {
        Self::report(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the visible slice of the catalog
    fn generate_catalog_report(
        &self,
        frame: &RenderFrame,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the model and storage chips
    fn generate_options_report(
        &self,
        options: &CatalogOptions,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a catalog report to a writer
    fn write_catalog_report(
        &self,
        frame: &RenderFrame,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_catalog_report(frame, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json | ReportFormat::Tui => Box::new(JsonReporter::new()),
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
    }
}
