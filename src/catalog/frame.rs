//! Render frames: everything a presentation layer needs to draw one state.
//!
//! Frames are plain owned data so they can be handed to the TUI, serialized
//! as JSON, or printed by the summary and table reporters.

use super::derive::{CatalogEntry, CatalogView};
use super::filter::{Choice, FilterSelection};
use super::options::{CatalogOptions, model_chip_label, storage_chip_label};
use super::price::resolve_price;
use crate::model::{Carrier, Listing};
use serde::Serialize;

/// Badge for the cheapest listing of its (model, storage) group.
pub const LOWEST_BADGE: &str = "最安";

/// Badge for listings in a device-return program.
pub const RETURN_PROGRAM_BADGE: &str = "返却P";

/// Separator between installment phases.
pub const PHASE_SEPARATOR: &str = " → ";

/// Shown when nothing passes the filters.
pub const NO_RESULTS_MESSAGE: &str = "条件に一致するiPhoneが見つかりませんでした";

/// Shown above the error detail of a failed load.
pub const LOAD_FAILED_MESSAGE: &str = "データの読み込みに失敗しました。";

/// Load status of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed { message: String },
}

impl LoadStatus {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// A selectable chip with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub value: Choice,
    pub label: String,
    pub selected: bool,
}

/// A carrier toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarrierChip {
    pub carrier: Carrier,
    pub label: &'static str,
    pub selected: bool,
}

/// One visible listing, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    /// Position in the loaded feed
    pub index: usize,
    pub carrier: Carrier,
    pub carrier_name: &'static str,
    pub model: String,
    pub storage: String,
    /// Resolved price in the current pricing mode
    pub price: i64,
    pub price_text: String,
    /// `月々` or `一括`
    pub unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<String>,
    pub is_lowest: bool,
    pub return_program: bool,
    pub badges: Vec<&'static str>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock_variants: Option<usize>,
}

impl ListingCard {
    fn from_entry(entry: &CatalogEntry<'_>, selection: &FilterSelection) -> Self {
        let listing = entry.listing;
        let mode = selection.pricing_mode;
        let price = resolve_price(listing, mode);
        let return_program = listing.in_return_program();

        let mut badges = Vec::new();
        if entry.is_lowest {
            badges.push(LOWEST_BADGE);
        }
        if return_program {
            badges.push(RETURN_PROGRAM_BADGE);
        }

        Self {
            index: entry.index,
            carrier: listing.carrier,
            carrier_name: listing.carrier.display_name(),
            model: listing.model.clone(),
            storage: listing.storage.clone(),
            price,
            price_text: format!("{}〜", format_yen(price)),
            unit: mode.unit_label(),
            phases: phase_summary(listing),
            is_lowest: entry.is_lowest,
            return_program,
            badges,
            url: listing.url.clone(),
            in_stock_variants: (!listing.variants.is_empty())
                .then(|| listing.in_stock_variants()),
        }
    }
}

/// A complete, self-contained snapshot for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub status: LoadStatus,
    pub updated_at: String,
    pub cards: Vec<ListingCard>,
    pub matching_count: usize,
    pub has_more: bool,
    pub is_expanded: bool,
    pub remaining_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_more_label: Option<String>,
    pub carriers: Vec<CarrierChip>,
    pub models: Vec<Chip>,
    pub storages: Vec<Chip>,
    pub selection: FilterSelection,
    /// The renderer should scroll back to the top of the list
    pub scroll_to_top: bool,
}

impl RenderFrame {
    /// Frame for a session that has no data yet (loading or failed).
    #[must_use]
    pub fn without_data(status: LoadStatus, selection: &FilterSelection) -> Self {
        Self {
            status,
            updated_at: crate::model::UNKNOWN_UPDATED_AT.to_string(),
            cards: Vec::new(),
            matching_count: 0,
            has_more: false,
            is_expanded: false,
            remaining_count: 0,
            show_more_label: None,
            carriers: carrier_chips(selection),
            models: Vec::new(),
            storages: Vec::new(),
            selection: selection.clone(),
            scroll_to_top: false,
        }
    }

    /// Frame for a loaded catalog.
    #[must_use]
    pub fn from_view(
        view: &CatalogView<'_>,
        options: &CatalogOptions,
        selection: &FilterSelection,
        updated_at: &str,
        scroll_to_top: bool,
    ) -> Self {
        Self {
            status: LoadStatus::Ready,
            updated_at: updated_at.to_string(),
            cards: view
                .visible
                .iter()
                .map(|entry| ListingCard::from_entry(entry, selection))
                .collect(),
            matching_count: view.matching_count,
            has_more: view.has_more,
            is_expanded: view.is_expanded,
            remaining_count: view.remaining_count,
            show_more_label: view.has_more.then(|| show_more_label(view.remaining_count)),
            carriers: carrier_chips(selection),
            models: chips(&options.models, &selection.model, model_chip_label),
            storages: chips(&options.storages, &selection.storage, storage_chip_label),
            selection: selection.clone(),
            scroll_to_top,
        }
    }

    /// Loaded, but nothing passes the filters.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.status.is_ready() && self.matching_count == 0
    }
}

fn carrier_chips(selection: &FilterSelection) -> Vec<CarrierChip> {
    Carrier::ALL
        .into_iter()
        .map(|carrier| CarrierChip {
            carrier,
            label: carrier.display_name(),
            selected: selection.has_carrier(carrier),
        })
        .collect()
}

fn chips(choices: &[Choice], selected: &Choice, label: fn(&Choice) -> String) -> Vec<Chip> {
    choices
        .iter()
        .map(|choice| Chip {
            value: choice.clone(),
            label: label(choice),
            selected: choice == selected,
        })
        .collect()
}

/// Label of the "show more" control.
#[must_use]
pub fn show_more_label(remaining: usize) -> String {
    format!("もっと見る（あと{remaining}件）")
}

/// Installment phases as `period: ¥amount` joined by arrows.
///
/// Only shown for multi-phase schedules; phases without a positive amount
/// are skipped.
#[must_use]
pub fn phase_summary(listing: &Listing) -> Option<String> {
    if listing.monthly_payment_phases.len() <= 1 {
        return None;
    }
    let parts: Vec<String> = listing
        .monthly_payment_phases
        .iter()
        .filter(|p| p.amount > 0)
        .map(|p| format!("{}: {}", p.period, format_yen(p.amount)))
        .collect();
    (!parts.is_empty()).then(|| parts.join(PHASE_SEPARATOR))
}

/// Format a yen amount with thousands separators, e.g. `¥12,345`.
#[must_use]
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PaymentPhase, StockVariant};

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(980), "¥980");
        assert_eq!(format_yen(1_606), "¥1,606");
        assert_eq!(format_yen(145_440), "¥145,440");
        assert_eq!(format_yen(1_234_567), "¥1,234,567");
        assert_eq!(format_yen(-22_000), "-¥22,000");
    }

    #[test]
    fn test_phase_summary_needs_two_phases() {
        let single = Listing::new(Carrier::Au, "iPhone 16", "128GB", 1).with_phases(vec![
            PaymentPhase {
                period: "1～24回".into(),
                amount: 1_980,
            },
        ]);
        assert_eq!(phase_summary(&single), None);

        let staged = Listing::new(Carrier::Au, "iPhone 16", "128GB", 1).with_phases(vec![
            PaymentPhase {
                period: "1回目".into(),
                amount: 2_000,
            },
            PaymentPhase {
                period: "2～23回".into(),
                amount: 0,
            },
            PaymentPhase {
                period: "24回目".into(),
                amount: 45_000,
            },
        ]);
        assert_eq!(
            phase_summary(&staged).as_deref(),
            Some("1回目: ¥2,000 → 24回目: ¥45,000")
        );
    }

    #[test]
    fn test_card_badges() {
        let mut listing = Listing::new(Carrier::Rakuten, "iPhone 16", "128GB", 131_800)
            .with_monthly_payment(5_491)
            .with_program_exemption(65_904);
        listing.variants = vec![
            StockVariant {
                color: "ブラック".into(),
                stock_text: "在庫あり".into(),
                stock_available: true,
            },
            StockVariant {
                color: "ピンク".into(),
                stock_text: "在庫なし".into(),
                stock_available: false,
            },
        ];
        let entry = CatalogEntry {
            index: 3,
            listing: &listing,
            is_lowest: true,
        };
        let card = ListingCard::from_entry(&entry, &FilterSelection::default());
        assert_eq!(card.carrier_name, "楽天モバイル");
        assert_eq!(card.price, 5_491);
        assert_eq!(card.price_text, "¥5,491〜");
        assert_eq!(card.unit, "月々");
        assert_eq!(card.badges, vec![LOWEST_BADGE, RETURN_PROGRAM_BADGE]);
        assert_eq!(card.in_stock_variants, Some(1));
    }

    #[test]
    fn test_show_more_label() {
        assert_eq!(show_more_label(7), "もっと見る（あと7件）");
    }

    #[test]
    fn test_without_data_frame() {
        let frame = RenderFrame::without_data(LoadStatus::Loading, &FilterSelection::default());
        assert!(!frame.is_no_results());
        assert_eq!(frame.updated_at, "不明");
        assert_eq!(frame.carriers.len(), 6);
        assert!(frame.carriers.iter().all(|c| c.selected));
    }
}
