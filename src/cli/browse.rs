//! Browse command handler.
//!
//! Implements the `browse` subcommand: load the feed, apply the initial
//! selection and render either the TUI or a report.

use crate::catalog::{CatalogSession, RenderFrame, UserEvent};
use crate::config::BrowseConfig;
use crate::pipeline::{
    OutputTarget, auto_detect_format, exit_codes, load_catalog_with_context, should_use_color,
    write_output,
};
use crate::reports::{ReportConfig, ReportFormat, create_reporter_with_options};
use crate::tui::{CatalogApp, run_catalog_tui};
use anyhow::Result;

/// Run the browse command
#[allow(clippy::needless_pass_by_value)]
pub fn run_browse(config: BrowseConfig) -> Result<i32> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    if effective_output == ReportFormat::Tui {
        let mut app = CatalogApp::new(config.selection.clone(), config.source.clone())
            .with_theme(&config.tui.theme)
            .with_mouse(config.tui.mouse_enabled);
        run_catalog_tui(&mut app)?;
        return Ok(exit_codes::SUCCESS);
    }

    let store = load_catalog_with_context(&config.source, config.quiet)?;
    let mut session = CatalogSession::new(config.selection.clone());
    session.load_ready(store);
    let frame = expand_pages(&mut session, config.pages);

    tracing::debug!(
        "Rendering {} of {} listings as {}",
        frame.cards.len(),
        frame.matching_count,
        effective_output
    );

    let report_config = ReportConfig::for_source(config.source.to_string());
    let reporter =
        create_reporter_with_options(effective_output, should_use_color(config.output.no_color));
    let report = reporter.generate_catalog_report(&frame, &report_config)?;
    write_output(&report, &output_target, config.quiet)?;

    if frame.is_no_results() {
        return Ok(exit_codes::NO_RESULTS);
    }
    Ok(exit_codes::SUCCESS)
}

/// Apply "show more" up to `pages` times, stopping once everything is shown.
pub fn expand_pages(session: &mut CatalogSession, pages: usize) -> RenderFrame {
    let mut frame = session.frame();
    for _ in 0..pages {
        if !session.can_show_more() {
            break;
        }
        frame = session.handle(UserEvent::ShowMore);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterSelection;
    use crate::model::{Carrier, Listing, ListingStore};

    fn store(n: i64) -> ListingStore {
        ListingStore::new(
            (0..n)
                .map(|i| Listing::new(Carrier::Au, "iPhone 15", "128GB", 100_000 + i))
                .collect(),
        )
    }

    #[test]
    fn test_expand_pages_stops_when_exhausted() {
        let mut session = CatalogSession::new(FilterSelection::default());
        session.load_ready(store(12));

        let frame = expand_pages(&mut session, 10);
        assert_eq!(frame.cards.len(), 12);
        assert!(!frame.has_more);
        assert!(frame.is_expanded);
    }

    #[test]
    fn test_expand_zero_pages_keeps_initial_window() {
        let mut session = CatalogSession::new(FilterSelection::default());
        session.load_ready(store(12));

        let frame = expand_pages(&mut session, 0);
        assert_eq!(frame.cards.len(), 5);
        assert_eq!(frame.remaining_count, 7);
    }
}
