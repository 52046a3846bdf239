//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::{CatalogOptions, RenderFrame};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl JsonReportMetadata {
    fn new(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            source: config.metadata.source.clone(),
        }
    }
}

#[derive(Serialize)]
struct JsonCatalogReport<'a> {
    metadata: JsonReportMetadata,
    catalog: &'a RenderFrame,
}

#[derive(Serialize)]
struct JsonOptionsReport<'a> {
    metadata: JsonReportMetadata,
    options: &'a CatalogOptions,
}

impl ReportGenerator for JsonReporter {
    fn generate_catalog_report(
        &self,
        frame: &RenderFrame,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.serialize(&JsonCatalogReport {
            metadata: JsonReportMetadata::new(config),
            catalog: frame,
        })
    }

    fn generate_options_report(
        &self,
        options: &CatalogOptions,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.serialize(&JsonOptionsReport {
            metadata: JsonReportMetadata::new(config),
            options,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
