//! Feed loading stage.

use crate::error::Result as CatalogResult;
use crate::model::ListingStore;
use crate::parsers::{FeedSource, load_feed};
use anyhow::{Context, Result};

/// Load the listing store from `source`, keeping the typed error.
///
/// This is what the TUI's background loader calls: the caller needs
/// [`crate::CatalogError::user_message`] for the static error indicator.
pub fn load_store(source: &FeedSource) -> CatalogResult<ListingStore> {
    let feed = load_feed(source)?;
    Ok(ListingStore::from(feed))
}

/// Load the listing store with context for error messages.
pub fn load_catalog_with_context(source: &FeedSource, quiet: bool) -> Result<ListingStore> {
    if !quiet {
        tracing::info!("Loading catalog feed: {}", source);
    }

    let store =
        load_store(source).with_context(|| format!("Failed to load catalog from {source}"))?;

    if !quiet {
        tracing::info!(
            "Loaded {} listings (updated {})",
            store.len(),
            store.updated_at_label()
        );
    }
    if let Some(raw) = store.updated_at()
        && store.updated_at_parsed().is_none()
    {
        tracing::debug!("updated_at '{}' is not in the expected format", raw);
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_catalog_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"items": [{"carrier": "ahamo", "model": "iPhone 15", "storage": "128GB", "price_gross": 112530}]}"#,
        )
        .unwrap();

        let store = load_catalog_with_context(&FeedSource::File(path), true).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.updated_at_label(), "不明");
    }

    #[test]
    fn test_error_names_the_source() {
        let source = FeedSource::File(PathBuf::from("/nonexistent/data.json"));
        let err = load_catalog_with_context(&source, true).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/data.json"));
    }
}
