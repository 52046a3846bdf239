//! Interactive catalog browser using ratatui.
//!
//! [`CatalogApp`] wraps a [`crate::catalog::CatalogSession`]: key presses
//! become [`crate::catalog::UserEvent`]s, every event yields a fresh
//! [`crate::catalog::RenderFrame`], and the UI draws only that frame. The
//! feed loads on a worker thread so the loading indicator stays live.

mod app;
mod events;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
pub(crate) mod widgets;

pub use app::{CatalogApp, Focus};
pub use events::{Event, EventHandler, LoadOutcome, handle_key_event, handle_mouse_event};
pub use state::{ListNavigation, ListState};
pub use theme::{ColorScheme, FooterHints, Styles, Theme, colors, set_theme, toggle_theme};
pub use ui::{render, run_catalog_tui};
pub use viewmodel::{CycleFilter, StatusMessage};
