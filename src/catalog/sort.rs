//! Sort keys and the listing comparator.

use super::price::{PricingMode, resolve_price};
use crate::model::{Listing, compare_newest_first};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Order in which matching listings are presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Cheapest first
    #[default]
    #[value(alias = "price_asc")]
    PriceAscending,
    /// Most expensive first
    #[value(alias = "price_desc")]
    PriceDescending,
    /// Newest generation first
    #[value(alias = "model_newest")]
    ModelNewest,
}

impl SortKey {
    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAscending => "価格が安い順",
            Self::PriceDescending => "価格が高い順",
            Self::ModelNewest => "新しい機種順",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceAscending => write!(f, "price-ascending"),
            Self::PriceDescending => write!(f, "price-descending"),
            Self::ModelNewest => write!(f, "model-newest"),
        }
    }
}

/// Compare two listings under `key`.
///
/// Price orders have no secondary key; pair with a stable sort so equal
/// prices keep feed order.
#[must_use]
pub fn compare_listings(a: &Listing, b: &Listing, key: SortKey, mode: PricingMode) -> Ordering {
    match key {
        SortKey::ModelNewest => compare_newest_first(&a.model, &b.model),
        SortKey::PriceAscending => resolve_price(a, mode).cmp(&resolve_price(b, mode)),
        SortKey::PriceDescending => resolve_price(b, mode).cmp(&resolve_price(a, mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Carrier;

    fn priced(model: &str, monthly: i64) -> Listing {
        Listing::new(Carrier::Au, model, "128GB", monthly * 24).with_monthly_payment(monthly)
    }

    #[test]
    fn test_price_orders() {
        let cheap = priced("iPhone 15", 1_000);
        let dear = priced("iPhone 15", 4_000);
        let mode = PricingMode::Recurring;
        assert_eq!(
            compare_listings(&cheap, &dear, SortKey::PriceAscending, mode),
            Ordering::Less
        );
        assert_eq!(
            compare_listings(&cheap, &dear, SortKey::PriceDescending, mode),
            Ordering::Greater
        );
        assert_eq!(
            compare_listings(&cheap, &cheap.clone(), SortKey::PriceDescending, mode),
            Ordering::Equal
        );
    }

    #[test]
    fn test_newest_ranks_special_edition_last() {
        let se = priced("iPhone SE (第3世代)", 500);
        let eleven = priced("iPhone 11", 900);
        assert_eq!(
            compare_listings(&eleven, &se, SortKey::ModelNewest, PricingMode::Recurring),
            Ordering::Less
        );
    }

    #[test]
    fn test_stable_sort_keeps_feed_order_for_equal_prices() {
        let mut listings = vec![
            priced("iPhone 16", 2_000).with_url("first"),
            priced("iPhone 15", 1_000),
            priced("iPhone 17", 2_000).with_url("second"),
        ];
        listings.sort_by(|a, b| {
            compare_listings(a, b, SortKey::PriceDescending, PricingMode::Recurring)
        });
        assert_eq!(listings[0].url, "first");
        assert_eq!(listings[1].url, "second");
        assert_eq!(listings[2].model, "iPhone 15");
    }

    #[test]
    fn test_sort_key_cli_aliases() {
        assert_eq!(
            SortKey::from_str("price_desc", true).unwrap(),
            SortKey::PriceDescending
        );
        assert_eq!(
            SortKey::from_str("model-newest", true).unwrap(),
            SortKey::ModelNewest
        );
    }
}
