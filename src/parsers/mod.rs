//! Feed parsing and source resolution.
//!
//! The listing feed is a single JSON document:
//!
//! ```json
//! { "updated_at": "2025-01-15 09:30", "items": [ { "carrier": "au", ... } ] }
//! ```
//!
//! It can be read from a local file or, with the `remote` feature, fetched
//! over HTTP(S). Either way a directory-like source resolves to its
//! `data.json`.
//!
//! ## Usage
//!
//! ```no_run
//! use iphone_monitor::parsers::{FeedSource, load_feed};
//!
//! let source: FeedSource = "./docs/".parse().unwrap();
//! let feed = load_feed(&source).unwrap();
//! println!("{} listings", feed.items.len());
//! ```

#[cfg(feature = "remote")]
mod remote;
mod source;

#[cfg(feature = "remote")]
pub use remote::{FeedClient, FeedClientConfig};
pub use source::{FEED_FILE_NAME, FeedSource};

use crate::error::{CatalogError, ErrorContext, LoadErrorKind, Result};
use crate::model::CatalogFeed;
use std::path::Path;

/// Maximum feed size (64 MB). Real feeds are a few hundred kilobytes.
pub const MAX_FEED_SIZE: u64 = 64 * 1024 * 1024;

/// Parse a feed document from JSON text.
///
/// Listings with an unknown carrier or a missing required field fail the
/// whole document; there is no partial load.
pub fn parse_feed_str(content: &str) -> Result<CatalogFeed> {
    if content.trim().is_empty() {
        return Err(CatalogError::load("parsing feed", LoadErrorKind::EmptySource));
    }
    let feed: CatalogFeed = serde_json::from_str(content)?;
    Ok(feed)
}

/// Read and parse a feed file.
pub fn parse_feed(path: &Path) -> Result<CatalogFeed> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::io(path, e))?;
    if metadata.len() > MAX_FEED_SIZE {
        return Err(CatalogError::validation(format!(
            "feed file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_FEED_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_feed_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Load a feed from any supported source.
pub fn load_feed(source: &FeedSource) -> Result<CatalogFeed> {
    match source {
        FeedSource::File(path) => parse_feed(path),
        #[cfg(feature = "remote")]
        FeedSource::Url(url) => FeedClient::new(FeedClientConfig::default())?.fetch(url),
        #[cfg(not(feature = "remote"))]
        FeedSource::Url(url) => Err(CatalogError::load(
            "fetching feed",
            LoadErrorKind::RemoteDisabled(url.clone()),
        )),
    }
}
