//! Data model for the listing catalog.
//!
//! Listings are deserialized straight from the feed and never mutated
//! afterwards. Anything derived from them (lowest-price flags, filtered
//! views) lives in [`crate::catalog`].
//!
//! ```ignore
//! let feed: CatalogFeed = serde_json::from_str(&json)?;
//! let store = ListingStore::from(feed);
//! println!("{} listings, updated {}", store.len(), store.updated_at_label());
//! ```

mod feed;
mod generation;
mod listing;
mod storage;

pub use feed::*;
pub use generation::*;
pub use listing::*;
pub use storage::*;
