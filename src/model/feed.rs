//! The listing feed document and the in-memory store built from it.

use super::Listing;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Label shown when the feed does not say when it was produced.
pub const UNKNOWN_UPDATED_AT: &str = "不明";

/// Timestamp format written by the feed producer.
pub const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Top-level feed document: `{ "updated_at": ..., "items": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub items: Vec<Listing>,
}

/// Immutable listing set, populated once per load.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    updated_at: Option<String>,
    listings: Vec<Listing>,
}

impl ListingStore {
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            updated_at: None,
            listings,
        }
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Raw `updated_at` value, if the feed carried one.
    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// `updated_at` for display, falling back to [`UNKNOWN_UPDATED_AT`].
    #[must_use]
    pub fn updated_at_label(&self) -> &str {
        self.updated_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_UPDATED_AT)
    }

    /// `updated_at` parsed as a local timestamp, when well-formed.
    #[must_use]
    pub fn updated_at_parsed(&self) -> Option<NaiveDateTime> {
        let raw = self.updated_at.as_deref()?;
        NaiveDateTime::parse_from_str(raw.trim(), UPDATED_AT_FORMAT).ok()
    }
}

impl From<CatalogFeed> for ListingStore {
    fn from(feed: CatalogFeed) -> Self {
        Self {
            updated_at: feed.updated_at,
            listings: feed.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Carrier;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_store_from_feed() {
        let feed = CatalogFeed {
            updated_at: Some("2025-09-20 08:15".to_string()),
            items: vec![Listing::new(Carrier::Au, "iPhone 17", "256GB", 145_000)],
        };
        let store = ListingStore::from(feed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.updated_at_label(), "2025-09-20 08:15");

        let parsed = store.updated_at_parsed().unwrap();
        assert_eq!(parsed.year(), 2025);
        assert_eq!(parsed.hour(), 8);
    }

    #[test]
    fn test_missing_updated_at_label() {
        let store = ListingStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.updated_at_label(), UNKNOWN_UPDATED_AT);
        assert!(store.updated_at_parsed().is_none());
    }

    #[test]
    fn test_malformed_updated_at_is_kept_verbatim() {
        let store = ListingStore::from(CatalogFeed {
            updated_at: Some("yesterday".to_string()),
            items: Vec::new(),
        });
        assert_eq!(store.updated_at_label(), "yesterday");
        assert!(store.updated_at_parsed().is_none());
    }
}
