//! **Browse and compare carrier iPhone pricing catalogs.**
//!
//! `iphone-monitor` loads a pre-scraped listing feed (one entry per carrier,
//! model and storage tier) and turns it into a filterable, sortable catalog
//! with per-group lowest-price badges and incremental "show more"
//! disclosure. It powers both an interactive terminal UI and plain reports
//! (summary, table, JSON) for scripts.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the immutable [`Listing`] records and the [`ListingStore`]
//!   they are loaded into.
//! - **[`catalog`]**: the derivation pipeline. Price resolution per
//!   [`PricingMode`], lowest-price annotation, the filter predicate, the sort
//!   comparator, the disclosure state machine, and [`CatalogSession`], which
//!   ties them together and emits [`RenderFrame`]s.
//! - **[`parsers`]**: feed sources (file, directory or URL) and decoding.
//! - **[`reports`]**: renderers that turn a [`RenderFrame`] into text.
//! - **[`tui`]**: the interactive browser.
//!
//! ## Getting Started
//!
//! ```no_run
//! use iphone_monitor::{CatalogSession, FeedSource, FilterSelection, UserEvent, load_store};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source: FeedSource = "data.json".parse()?;
//!     let store = load_store(&source)?;
//!
//!     let mut session = CatalogSession::new(FilterSelection::default());
//!     let frame = session.load_ready(store);
//!     for card in &frame.cards {
//!         println!("{} {} {} {}", card.model, card.storage, card.carrier_name, card.price_text);
//!     }
//!
//!     // Reveal five more results.
//!     let frame = session.handle(UserEvent::ShowMore);
//!     println!("{} of {} shown", frame.cards.len(), frame.matching_count);
//!     Ok(())
//! }
//! ```
//!
//! ### Comparing one-time prices
//!
//! ```no_run
//! use iphone_monitor::{CatalogSession, FilterSelection, ListingStore, PricingMode, UserEvent};
//!
//! # fn demo(store: ListingStore) {
//! let mut session = CatalogSession::new(FilterSelection::default());
//! session.load_ready(store);
//! let frame = session.handle(UserEvent::SetPricingMode(PricingMode::OneTime));
//! for card in frame.cards.iter().filter(|c| c.is_lowest) {
//!     println!("lowest: {} {} @ {}", card.model, card.storage, card.carrier_name);
//! }
//! # }
//! ```

#![warn(clippy::unwrap_used)]
#![allow(
    // Prices and counts are small; the casts are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::unused_self,
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use catalog::{
    CatalogOptions, CatalogSession, Choice, DisclosureState, FilterSelection, ListingCard,
    LowestPriceFlags, PricingMode, RenderFrame, SortKey, UserEvent, annotate_lowest,
    compare_listings, derive_view, passes, resolve_price,
};
pub use config::{AppConfig, ConfigError, TuiConfig, Validatable};
pub use error::{CatalogError, ErrorContext, LoadErrorKind, OptionContext, Result};
pub use model::{Carrier, CatalogFeed, Listing, ListingStore};
pub use parsers::{FeedSource, load_feed, parse_feed, parse_feed_str};
pub use pipeline::load_store;
pub use reports::{ReportFormat, ReportGenerator};

// TUI shared exports for building custom views
pub use tui::{CycleFilter, ListNavigation, ListState, StatusMessage};
