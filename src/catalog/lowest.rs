//! Lowest-in-group annotation.
//!
//! Listings are grouped by exact `(model, storage)`; every listing whose
//! resolved price equals its group's minimum is flagged. The flags are
//! computed over the whole store, independent of the active filters, and
//! only need recomputing when the store loads or the pricing mode changes.

use super::price::{PricingMode, resolve_price};
use crate::model::Listing;
use std::collections::HashMap;

/// Lowest-price flags aligned index-for-index with a listing slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LowestPriceFlags {
    mode: PricingMode,
    flags: Vec<bool>,
}

impl LowestPriceFlags {
    /// Pricing mode the flags were computed under.
    #[must_use]
    pub const fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Whether the listing at `index` is lowest in its group.
    #[must_use]
    pub fn is_lowest(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of listings carrying the badge.
    #[must_use]
    pub fn lowest_count(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }
}

/// Compute lowest-in-group flags for `listings` under `mode`.
///
/// Ties are not broken: every listing at the group minimum is flagged.
#[must_use]
pub fn annotate_lowest(listings: &[Listing], mode: PricingMode) -> LowestPriceFlags {
    let mut minimums: HashMap<(&str, &str), i64> = HashMap::new();
    for listing in listings {
        let price = resolve_price(listing, mode);
        minimums
            .entry((listing.model.as_str(), listing.storage.as_str()))
            .and_modify(|min| *min = (*min).min(price))
            .or_insert(price);
    }

    let flags = listings
        .iter()
        .map(|listing| {
            let key = (listing.model.as_str(), listing.storage.as_str());
            minimums
                .get(&key)
                .is_some_and(|min| *min == resolve_price(listing, mode))
        })
        .collect();

    tracing::debug!(
        groups = minimums.len(),
        listings = listings.len(),
        %mode,
        "annotated lowest prices"
    );

    LowestPriceFlags { mode, flags }
}
