//! Price resolution: one comparable number per listing and pricing mode.

use crate::model::Listing;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of monthly installments an effective rent total is spread over.
pub const RENT_MONTHS: i64 = 24;

/// Whether prices are compared as a monthly figure or a one-time total.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    /// Monthly installment (`月々`)
    #[default]
    #[value(alias = "rent", alias = "monthly")]
    Recurring,
    /// Cash price (`一括`)
    #[value(alias = "buyout")]
    OneTime,
}

impl PricingMode {
    /// Short unit label used next to prices.
    #[must_use]
    pub const fn unit_label(self) -> &'static str {
        match self {
            Self::Recurring => "月々",
            Self::OneTime => "一括",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recurring => write!(f, "recurring"),
            Self::OneTime => write!(f, "one-time"),
        }
    }
}

/// Monthly figure for a listing.
///
/// The published installment wins when it is present and non-zero;
/// otherwise the effective rent total is spread over [`RENT_MONTHS`]
/// (rounded down). Listings with neither resolve to 0.
#[must_use]
pub fn monthly_price(listing: &Listing) -> i64 {
    match (listing.monthly_payment, listing.price_effective_rent) {
        (Some(monthly), _) if monthly != 0 => monthly,
        (_, Some(total)) if total != 0 => total.div_euclid(RENT_MONTHS),
        _ => 0,
    }
}

/// Resolve the comparable price of a listing under `mode`.
#[must_use]
pub fn resolve_price(listing: &Listing, mode: PricingMode) -> i64 {
    match mode {
        PricingMode::OneTime => listing.price_gross,
        PricingMode::Recurring => monthly_price(listing),
    }
}
