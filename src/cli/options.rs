//! Options command handler.
//!
//! Lists the model and storage chips offered by the current feed.

use crate::catalog::CatalogOptions;
use crate::config::OptionsConfig;
use crate::pipeline::{
    OutputTarget, exit_codes, load_catalog_with_context, should_use_color, write_output,
};
use crate::reports::{ReportConfig, ReportFormat, create_reporter_with_options};
use anyhow::Result;

/// Run the options command
#[allow(clippy::needless_pass_by_value)]
pub fn run_options(config: OptionsConfig) -> Result<i32> {
    let store = load_catalog_with_context(&config.source, config.quiet)?;
    let options = CatalogOptions::from_listings(store.listings());

    let output_target = OutputTarget::from_option(config.output.file.clone());
    // Chips have no interactive view of their own.
    let format = match config.output.format {
        ReportFormat::Auto | ReportFormat::Tui => ReportFormat::Summary,
        other => other,
    };

    let report_config = ReportConfig::for_source(config.source.to_string());
    let reporter = create_reporter_with_options(format, should_use_color(config.output.no_color));
    let report = reporter.generate_options_report(&options, &report_config)?;
    write_output(&report, &output_target, config.quiet)?;

    if store.is_empty() {
        return Ok(exit_codes::NO_RESULTS);
    }
    Ok(exit_codes::SUCCESS)
}
