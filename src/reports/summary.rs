//! Summary and table report generators for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::catalog::{
    CatalogOptions, LOAD_FAILED_MESSAGE, LoadStatus, NO_RESULTS_MESSAGE, RenderFrame,
    model_chip_label, storage_chip_label,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Header lines shared by both reporters, plus whether any cards follow.
fn status_lines(
    frame: &RenderFrame,
    color: &dyn Fn(&str, &str) -> String,
) -> (Vec<String>, bool) {
    let mut lines = Vec::new();
    lines.push(color("iPhone Price Catalog", "bold"));
    lines.push(color("─".repeat(48).as_str(), "dim"));
    lines.push(format!("{}  {}", color("Updated:", "cyan"), frame.updated_at));

    match &frame.status {
        LoadStatus::Loading => {
            lines.push(color("Loading...", "dim"));
            return (lines, false);
        }
        LoadStatus::Failed { message } => {
            lines.push(format!(
                "{} {LOAD_FAILED_MESSAGE} ({message})",
                color("エラー:", "red")
            ));
            return (lines, false);
        }
        LoadStatus::Ready => {}
    }

    let selected: Vec<&str> = frame
        .carriers
        .iter()
        .filter(|c| c.selected)
        .map(|c| c.label)
        .collect();
    lines.push(format!(
        "{}  {}",
        color("Carriers:", "cyan"),
        if selected.is_empty() {
            "-".to_string()
        } else {
            selected.join(", ")
        }
    ));
    lines.push(format!(
        "{}  {} / {}  {}  {}",
        color("Filter:", "cyan"),
        model_chip_label(&frame.selection.model),
        storage_chip_label(&frame.selection.storage),
        frame.selection.pricing_mode.unit_label(),
        frame.selection.sort_key.label(),
    ));
    lines.push(format!(
        "{}  {} of {} listings",
        color("Showing:", "cyan"),
        frame.cards.len(),
        frame.matching_count
    ));
    lines.push(String::new());

    if frame.is_no_results() {
        lines.push(color(NO_RESULTS_MESSAGE, "yellow"));
        return (lines, false);
    }
    (lines, true)
}

/// Summary reporter: one block per visible listing
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_catalog_report(
        &self,
        frame: &RenderFrame,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let color = |text: &str, c: &str| self.color(text, c);
        let (mut lines, has_cards) = status_lines(frame, &color);
        if !has_cards {
            return Ok(lines.join("\n"));
        }

        for (rank, card) in frame.cards.iter().enumerate() {
            let mut title = format!(
                "{:>2}. {} {}",
                rank + 1,
                self.color(&card.model, "bold"),
                card.storage
            );
            for badge in &card.badges {
                let tint = if card.is_lowest && *badge == crate::catalog::LOWEST_BADGE {
                    "yellow"
                } else {
                    "red"
                };
                title.push(' ');
                title.push_str(&self.color(&format!("[{badge}]"), tint));
            }
            lines.push(title);
            lines.push(format!(
                "    {}  {} {}",
                card.carrier_name,
                self.color(card.unit, "dim"),
                self.color(&card.price_text, "green")
            ));
            if let Some(phases) = &card.phases {
                lines.push(format!("    {}", self.color(phases, "dim")));
            }
            if let Some(in_stock) = card.in_stock_variants {
                lines.push(format!("    在庫あり: {in_stock}色"));
            }
            if !card.url.is_empty() {
                lines.push(format!("    {}", self.color(&card.url, "cyan")));
            }
        }

        if let Some(label) = &frame.show_more_label {
            lines.push(String::new());
            lines.push(self.color(label, "dim"));
        }

        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        options: &CatalogOptions,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let models: Vec<String> = options.models.iter().map(model_chip_label).collect();
        let storages: Vec<String> = options.storages.iter().map(storage_chip_label).collect();
        Ok([
            format!("{}  {}", self.color("Models:", "cyan"), models.join(" | ")),
            format!("{}  {}", self.color("Storage:", "cyan"), storages.join(" | ")),
        ]
        .join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

const MODEL_COL: usize = 24;
const STORAGE_COL: usize = 10;
const CARRIER_COL: usize = 14;
const PRICE_COL: usize = 12;

impl ReportGenerator for TableReporter {
    fn generate_catalog_report(
        &self,
        frame: &RenderFrame,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let color = |text: &str, c: &str| self.color(text, c);
        let (mut lines, has_cards) = status_lines(frame, &color);
        if !has_cards {
            return Ok(lines.join("\n"));
        }

        lines.push(self.color(
            &format!(
                "{} {} {} {} {}",
                pad("MODEL", MODEL_COL),
                pad("STORAGE", STORAGE_COL),
                pad("CARRIER", CARRIER_COL),
                pad_left("PRICE", PRICE_COL),
                "BADGES"
            ),
            "bold",
        ));
        lines.push("─".repeat(MODEL_COL + STORAGE_COL + CARRIER_COL + PRICE_COL + 12));

        for card in &frame.cards {
            let price = format!("{} {}", card.unit, card.price_text);
            let badges = card.badges.join(" ");
            lines.push(format!(
                "{} {} {} {} {}",
                pad(&truncate(&card.model, MODEL_COL), MODEL_COL),
                pad(&truncate(&card.storage, STORAGE_COL), STORAGE_COL),
                pad(&truncate(card.carrier_name, CARRIER_COL), CARRIER_COL),
                pad_left(&price, PRICE_COL),
                if card.is_lowest {
                    self.color(&badges, "yellow")
                } else {
                    badges
                }
            ));
        }

        if let Some(label) = &frame.show_more_label {
            lines.push(self.color(label, "dim"));
        }

        Ok(lines.join("\n"))
    }

    fn generate_options_report(
        &self,
        options: &CatalogOptions,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = vec![
            self.color(
                &format!("{} {}", pad("KIND", 8), "VALUE"),
                "bold",
            ),
            "─".repeat(40),
        ];
        for model in &options.models {
            lines.push(format!("{} {}", pad("model", 8), model_chip_label(model)));
        }
        for storage in &options.storages {
            lines.push(format!("{} {}", pad("storage", 8), storage_chip_label(storage)));
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Right-pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let used = s.width();
    format!("{s}{}", " ".repeat(width.saturating_sub(used)))
}

/// Left-pad `s` with spaces to `width` terminal columns.
fn pad_left(s: &str, width: usize) -> String {
    let used = s.width();
    format!("{}{s}", " ".repeat(width.saturating_sub(used)))
}

/// Truncate a string to fit within `max_width` terminal columns.
///
/// Wide (CJK) characters count as two columns.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSession, UserEvent};
    use crate::model::{Carrier, Listing, ListingStore, PaymentPhase};

    fn listings() -> Vec<Listing> {
        let mut items: Vec<Listing> = (0..7)
            .map(|i| {
                Listing::new(Carrier::ALL[i % 6], "iPhone 16", "128GB", 120_000)
                    .with_monthly_payment(2_000 + i as i64 * 100)
                    .with_url(format!("https://example.com/{i}"))
            })
            .collect();
        items[0] = items[0].clone().with_program_exemption(40_000).with_phases(vec![
            PaymentPhase {
                period: "1～12回".into(),
                amount: 2_000,
            },
            PaymentPhase {
                period: "13～24回".into(),
                amount: 1_000,
            },
        ]);
        items
    }

    fn ready_frame() -> RenderFrame {
        let mut session = CatalogSession::default();
        session.load_ready(ListingStore::new(listings()))
    }

    #[test]
    fn test_summary_lists_cards_and_show_more() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_catalog_report(&ready_frame(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("Showing:  5 of 7 listings"));
        assert!(report.contains(" 1. iPhone 16 128GB [最安] [返却P]"));
        assert!(report.contains("楽天モバイル  月々 ¥2,000〜"));
        assert!(report.contains("1～12回: ¥2,000 → 13～24回: ¥1,000"));
        assert!(report.contains("もっと見る（あと2件）"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_summary_no_results() {
        let mut session = CatalogSession::default();
        session.load_ready(ListingStore::new(listings()));
        let frame = session.handle(UserEvent::SelectModel("iPhone 99".into()));
        let report = SummaryReporter::new()
            .no_color()
            .generate_catalog_report(&frame, &ReportConfig::default())
            .unwrap();
        assert!(report.contains(NO_RESULTS_MESSAGE));
        assert!(!report.contains("もっと見る"));
    }

    #[test]
    fn test_summary_failed_load() {
        let mut session = CatalogSession::default();
        let frame = session.load_failed("HTTP error! status: 500");
        let report = SummaryReporter::new()
            .no_color()
            .generate_catalog_report(&frame, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("エラー: データの読み込みに失敗しました。 (HTTP error! status: 500)"));
    }

    #[test]
    fn test_table_rows() {
        let report = TableReporter::new()
            .no_color()
            .generate_catalog_report(&ready_frame(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("MODEL"));
        let rows: Vec<&str> = report.lines().filter(|l| l.starts_with("iPhone 16")).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].contains("最安"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ドコモ", 8), "ドコモ  ");
        assert_eq!(pad_left("au", 4), "  au");
        assert_eq!(truncate("楽天モバイル", 7), "楽天モ…");
        assert_eq!(truncate("au", 7), "au");
    }

    #[test]
    fn test_options_summary() {
        let options = CatalogOptions::from_listings(&listings());
        let report = SummaryReporter::new()
            .no_color()
            .generate_options_report(&options, &ReportConfig::default())
            .unwrap();
        assert!(report.contains("Models:  全て | iPhone 16"));
        assert!(report.contains("Storage:  全て | 128GB"));
    }
}
