//! The catalog session: load state, filter selection and disclosure state in
//! one explicit object.
//!
//! Every user event mutates the session and synchronously re-derives the
//! view, returning a fresh [`RenderFrame`]. Nothing here blocks; loading
//! happens elsewhere and is handed in through [`CatalogSession::load_ready`]
//! or [`CatalogSession::load_failed`].

use super::derive::derive_view;
use super::disclosure::{DisclosureEvent, DisclosureState, Transition};
use super::filter::{Choice, FilterSelection, passes};
use super::frame::{LoadStatus, RenderFrame};
use super::lowest::{LowestPriceFlags, annotate_lowest};
use super::options::CatalogOptions;
use super::price::PricingMode;
use super::sort::SortKey;
use crate::model::{Carrier, ListingStore};

/// Events a user can raise against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    ToggleCarrier(Carrier),
    SelectModel(Choice),
    SelectStorage(Choice),
    SetSortKey(SortKey),
    SetPricingMode(PricingMode),
    ShowMore,
    Collapse,
}

/// Loaded data plus everything derived from it once per load or per
/// pricing-mode change.
#[derive(Debug)]
struct LoadedCatalog {
    store: ListingStore,
    lowest: LowestPriceFlags,
    options: CatalogOptions,
}

#[derive(Debug)]
enum LoadState {
    Loading,
    Ready(LoadedCatalog),
    Failed(String),
}

/// State of one catalog browsing session.
#[derive(Debug)]
pub struct CatalogSession {
    load: LoadState,
    selection: FilterSelection,
    disclosure: DisclosureState,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(FilterSelection::default())
    }
}

impl CatalogSession {
    /// A session waiting for its feed, starting from `selection`.
    #[must_use]
    pub fn new(selection: FilterSelection) -> Self {
        Self {
            load: LoadState::Loading,
            selection,
            disclosure: DisclosureState::new(),
        }
    }

    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub const fn disclosure(&self) -> &DisclosureState {
        &self.disclosure
    }

    /// The loaded store, once ready.
    #[must_use]
    pub fn store(&self) -> Option<&ListingStore> {
        match &self.load {
            LoadState::Ready(loaded) => Some(&loaded.store),
            _ => None,
        }
    }

    /// Option chips, once ready.
    #[must_use]
    pub fn options(&self) -> Option<&CatalogOptions> {
        match &self.load {
            LoadState::Ready(loaded) => Some(&loaded.options),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Error message of a failed load.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Listings passing the current filters (0 while not ready).
    #[must_use]
    pub fn matching_count(&self) -> usize {
        match &self.load {
            LoadState::Ready(loaded) => loaded
                .store
                .listings()
                .iter()
                .filter(|l| passes(l, &self.selection))
                .count(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn can_show_more(&self) -> bool {
        self.disclosure.can_show_more(self.matching_count())
    }

    #[must_use]
    pub const fn can_collapse(&self) -> bool {
        self.disclosure.can_collapse()
    }

    /// Install the loaded listing set and return the first frame.
    pub fn load_ready(&mut self, store: ListingStore) -> RenderFrame {
        let lowest = annotate_lowest(store.listings(), self.selection.pricing_mode);
        let options = CatalogOptions::from_listings(store.listings());
        tracing::info!(
            listings = store.len(),
            lowest = lowest.lowest_count(),
            models = options.models.len().saturating_sub(1),
            "catalog ready"
        );
        self.load = LoadState::Ready(LoadedCatalog {
            store,
            lowest,
            options,
        });
        self.disclosure = DisclosureState::new();
        self.render(false)
    }

    /// Record a terminal load failure and return the error frame.
    pub fn load_failed(&mut self, message: impl Into<String>) -> RenderFrame {
        let message = message.into();
        tracing::warn!(error = %message, "catalog load failed");
        self.load = LoadState::Failed(message);
        self.render(false)
    }

    /// Apply one user event and re-derive.
    pub fn handle(&mut self, event: UserEvent) -> RenderFrame {
        tracing::debug!(?event, "handling catalog event");
        let transition = match event {
            UserEvent::ToggleCarrier(carrier) => {
                self.selection.toggle_carrier(carrier);
                self.disclose(DisclosureEvent::FilterChanged)
            }
            UserEvent::SelectModel(model) => {
                self.selection.model = model;
                self.disclose(DisclosureEvent::FilterChanged)
            }
            UserEvent::SelectStorage(storage) => {
                self.selection.storage = storage;
                self.disclose(DisclosureEvent::FilterChanged)
            }
            UserEvent::SetSortKey(key) => {
                self.selection.sort_key = key;
                self.disclose(DisclosureEvent::SortChanged)
            }
            UserEvent::SetPricingMode(mode) => {
                self.selection.pricing_mode = mode;
                if let LoadState::Ready(loaded) = &mut self.load
                    && loaded.lowest.mode() != mode
                {
                    loaded.lowest = annotate_lowest(loaded.store.listings(), mode);
                }
                self.disclose(DisclosureEvent::PricingModeChanged)
            }
            UserEvent::ShowMore => self.disclose(DisclosureEvent::ShowMore),
            UserEvent::Collapse => self.disclose(DisclosureEvent::Collapse),
        };
        if !transition.applied {
            tracing::debug!("event ignored in current disclosure state");
        }
        self.render(transition.scroll_to_top)
    }

    /// The current frame without applying any event.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.render(false)
    }

    fn disclose(&mut self, event: DisclosureEvent) -> Transition {
        let matching = self.matching_count();
        self.disclosure.apply(event, matching)
    }

    fn render(&self, scroll_to_top: bool) -> RenderFrame {
        match &self.load {
            LoadState::Loading => RenderFrame::without_data(LoadStatus::Loading, &self.selection),
            LoadState::Failed(message) => RenderFrame::without_data(
                LoadStatus::Failed {
                    message: message.clone(),
                },
                &self.selection,
            ),
            LoadState::Ready(loaded) => {
                let view = derive_view(
                    loaded.store.listings(),
                    &loaded.lowest,
                    &self.selection,
                    &self.disclosure,
                );
                RenderFrame::from_view(
                    &view,
                    &loaded.options,
                    &self.selection,
                    loaded.store.updated_at_label(),
                    scroll_to_top,
                )
            }
        }
    }
}
