//! Catalog view derivation: filter → sort → slice.
//!
//! Everything here is a pure function of its inputs; calling
//! [`derive_view`] twice with the same arguments yields the same view.

use super::disclosure::DisclosureState;
use super::filter::{FilterSelection, passes};
use super::lowest::LowestPriceFlags;
use super::sort::compare_listings;
use crate::model::Listing;

/// A listing paired with its lowest-in-group flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    /// Position of the listing in the store
    pub index: usize,
    pub listing: &'a Listing,
    pub is_lowest: bool,
}

/// The slice of the catalog currently exposed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    pub visible: Vec<CatalogEntry<'a>>,
    /// Listings passing the filters, before slicing
    pub matching_count: usize,
    pub has_more: bool,
    pub is_expanded: bool,
    pub remaining_count: usize,
}

impl CatalogView<'_> {
    /// No listing passes the current filters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.matching_count == 0
    }
}

/// Listings passing `selection`, stably sorted by its sort key.
#[must_use]
pub fn filter_and_sort<'a>(
    listings: &'a [Listing],
    lowest: &LowestPriceFlags,
    selection: &FilterSelection,
) -> Vec<CatalogEntry<'a>> {
    let mut entries: Vec<CatalogEntry<'a>> = listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| passes(listing, selection))
        .map(|(index, listing)| CatalogEntry {
            index,
            listing,
            is_lowest: lowest.is_lowest(index),
        })
        .collect();

    entries.sort_by(|a, b| {
        compare_listings(a.listing, b.listing, selection.sort_key, selection.pricing_mode)
    });
    entries
}

/// Derive the visible view for the current selection and disclosure state.
#[must_use]
pub fn derive_view<'a>(
    listings: &'a [Listing],
    lowest: &LowestPriceFlags,
    selection: &FilterSelection,
    disclosure: &DisclosureState,
) -> CatalogView<'a> {
    let mut sorted = filter_and_sort(listings, lowest, selection);
    let matching_count = sorted.len();
    let visible_count = disclosure.visible_count();
    sorted.truncate(visible_count);

    tracing::debug!(
        total = listings.len(),
        matching = matching_count,
        visible = sorted.len(),
        "derived catalog view"
    );

    CatalogView {
        visible: sorted,
        matching_count,
        has_more: disclosure.can_show_more(matching_count),
        is_expanded: disclosure.is_expanded(),
        remaining_count: disclosure.remaining(matching_count),
    }
}
