//! Small state components embedded in [`super::CatalogApp`].
//!
//! - [`CycleFilter`] - one-key cycling for the sort and pricing selectors
//! - [`StatusMessage`] - temporary status line text

mod filter;
mod status;

pub use filter::CycleFilter;
pub use status::StatusMessage;
