//! The catalog derivation pipeline.
//!
//! Raw listings flow through a fixed sequence of pure stages:
//!
//! 1. [`annotate_lowest`] tags the cheapest listing(s) of every
//!    (model, storage) group, once per load and per pricing-mode change.
//! 2. [`passes`] filters by carrier, model and storage.
//! 3. [`compare_listings`] orders the survivors (stable sort).
//! 4. [`derive_view`] slices the sorted list according to the
//!    [`DisclosureState`].
//!
//! [`CatalogSession`] owns the mutable state (load status, selection,
//! disclosure) and turns each [`UserEvent`] into a [`RenderFrame`].

mod derive;
mod disclosure;
mod filter;
mod frame;
mod lowest;
mod options;
mod price;
mod session;
mod sort;

pub use derive::{CatalogEntry, CatalogView, derive_view, filter_and_sort};
pub use disclosure::{
    DisclosureEvent, DisclosureState, INITIAL_VISIBLE, Transition, VISIBLE_STEP,
};
pub use filter::{ALL_LABEL, Choice, FilterSelection, passes, storage_matches};
pub use frame::{
    CarrierChip, Chip, LOAD_FAILED_MESSAGE, LOWEST_BADGE, ListingCard, LoadStatus,
    NO_RESULTS_MESSAGE, PHASE_SEPARATOR, RETURN_PROGRAM_BADGE, RenderFrame, format_yen,
    phase_summary, show_more_label,
};
pub use lowest::{LowestPriceFlags, annotate_lowest};
pub use options::{ALL_CHIP_LABEL, CatalogOptions, model_chip_label, storage_chip_label};
pub use price::{PricingMode, RENT_MONTHS, monthly_price, resolve_price};
pub use session::{CatalogSession, UserEvent};
pub use sort::{SortKey, compare_listings};
