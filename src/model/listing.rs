//! Catalog listing structures as they appear in the feed.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mobile carrier offering a listing.
///
/// The enumeration is closed: a feed naming any other carrier fails to load.
/// Declaration order is the order carriers are presented in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
pub enum Carrier {
    #[serde(rename = "Rakuten")]
    #[value(name = "rakuten")]
    Rakuten,
    #[serde(rename = "ahamo")]
    #[value(name = "ahamo")]
    Ahamo,
    #[serde(rename = "UQ mobile")]
    #[value(name = "uq-mobile", alias = "uq")]
    UqMobile,
    #[serde(rename = "au")]
    #[value(name = "au")]
    Au,
    #[serde(rename = "SoftBank")]
    #[value(name = "softbank")]
    SoftBank,
    #[serde(rename = "docomo")]
    #[value(name = "docomo")]
    Docomo,
}

impl Carrier {
    /// Every carrier, in presentation order.
    pub const ALL: [Self; 6] = [
        Self::Rakuten,
        Self::Ahamo,
        Self::UqMobile,
        Self::Au,
        Self::SoftBank,
        Self::Docomo,
    ];

    /// Identifier used by the feed (`carrier` field).
    #[must_use]
    pub const fn feed_name(self) -> &'static str {
        match self {
            Self::Rakuten => "Rakuten",
            Self::Ahamo => "ahamo",
            Self::UqMobile => "UQ mobile",
            Self::Au => "au",
            Self::SoftBank => "SoftBank",
            Self::Docomo => "docomo",
        }
    }

    /// Name shown to users.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rakuten => "楽天モバイル",
            Self::Docomo => "ドコモ",
            other => other.feed_name(),
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feed_name())
    }
}

/// Error returned when a carrier name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown carrier '{0}'")]
pub struct UnknownCarrier(pub String);

impl FromStr for Carrier {
    type Err = UnknownCarrier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.feed_name().eq_ignore_ascii_case(wanted)
                    || c.to_possible_value()
                        .is_some_and(|v| v.matches(wanted, true))
            })
            .ok_or_else(|| UnknownCarrier(s.to_string()))
    }
}

/// One step of an installment schedule, e.g. `1～24回: ¥1,980`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPhase {
    /// Installment range label as published by the carrier
    pub period: String,
    /// Monthly amount charged during the period
    pub amount: i64,
}

/// Per-color stock information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockVariant {
    pub color: String,
    #[serde(default)]
    pub stock_text: String,
    #[serde(default)]
    pub stock_available: bool,
}

/// One catalog entry: a device model and storage tier offered by a carrier.
///
/// Immutable once loaded. Price fields that a carrier does not publish are
/// simply absent; see [`crate::catalog::resolve_price`] for how they degrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub carrier: Carrier,
    pub model: String,
    pub storage: String,
    /// One-time (cash) price
    pub price_gross: i64,
    /// Published monthly installment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<i64>,
    /// Effective two-year rent total, used to derive a monthly figure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_effective_rent: Option<i64>,
    #[serde(default)]
    pub monthly_payment_phases: Vec<PaymentPhase>,
    /// Amount exempted when the device is returned; positive means the
    /// listing participates in a return program.
    #[serde(default)]
    pub program_exemption: i64,
    #[serde(default)]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_effective_buyout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_official: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<StockVariant>,
}

impl Listing {
    /// Minimal listing with only the identifying fields and a cash price.
    #[must_use]
    pub fn new(
        carrier: Carrier,
        model: impl Into<String>,
        storage: impl Into<String>,
        price_gross: i64,
    ) -> Self {
        Self {
            carrier,
            model: model.into(),
            storage: storage.into(),
            price_gross,
            monthly_payment: None,
            price_effective_rent: None,
            monthly_payment_phases: Vec::new(),
            program_exemption: 0,
            url: String::new(),
            price_effective_buyout: None,
            discount_official: None,
            points_awarded: None,
            variants: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_monthly_payment(mut self, amount: i64) -> Self {
        self.monthly_payment = Some(amount);
        self
    }

    #[must_use]
    pub const fn with_effective_rent(mut self, total: i64) -> Self {
        self.price_effective_rent = Some(total);
        self
    }

    #[must_use]
    pub const fn with_program_exemption(mut self, amount: i64) -> Self {
        self.program_exemption = amount;
        self
    }

    #[must_use]
    pub fn with_phases(mut self, phases: Vec<PaymentPhase>) -> Self {
        self.monthly_payment_phases = phases;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Whether the listing carries the "return program" badge.
    #[must_use]
    pub const fn in_return_program(&self) -> bool {
        self.program_exemption > 0
    }

    /// Number of colors currently reported in stock.
    #[must_use]
    pub fn in_stock_variants(&self) -> usize {
        self.variants.iter().filter(|v| v.stock_available).count()
    }
}
