//! Application state for the catalog TUI.

use super::state::{ListNavigation, ListState};
use super::viewmodel::{CycleFilter, StatusMessage};
use crate::catalog::{CatalogSession, FilterSelection, ListingCard, RenderFrame, UserEvent};
use crate::model::{Carrier, ListingStore};
use crate::parsers::FeedSource;
use std::time::Duration;

/// How long transient status messages stay on screen.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which panel receives cursor keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Carriers,
    Models,
    Storages,
    Cards,
}

impl Focus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Carriers => Self::Models,
            Self::Models => Self::Storages,
            Self::Storages => Self::Cards,
            Self::Cards => Self::Carriers,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Carriers => Self::Cards,
            Self::Models => Self::Carriers,
            Self::Storages => Self::Models,
            Self::Cards => Self::Storages,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Carriers => "キャリア",
            Self::Models => "機種",
            Self::Storages => "容量",
            Self::Cards => "一覧",
        }
    }
}

/// The catalog TUI: a [`CatalogSession`] plus cursor and chrome state.
///
/// All catalog semantics live in the session; the app only tracks which
/// chip or card the keyboard cursor is on and redraws the latest frame.
#[derive(Debug)]
pub struct CatalogApp {
    session: CatalogSession,
    frame: RenderFrame,
    source: FeedSource,
    pub focus: Focus,
    pub(crate) carrier_cursor: ListState,
    pub(crate) model_cursor: ListState,
    pub(crate) storage_cursor: ListState,
    pub cards: ListState,
    pub status: StatusMessage,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    pub(crate) theme_name: String,
    pub(crate) mouse_enabled: bool,
    reload_requested: bool,
}

impl CatalogApp {
    /// A loading app for `source`, starting from `selection`.
    #[must_use]
    pub fn new(selection: FilterSelection, source: FeedSource) -> Self {
        let session = CatalogSession::new(selection);
        let frame = session.frame();
        let mut app = Self {
            session,
            frame: frame.clone(),
            source,
            focus: Focus::default(),
            carrier_cursor: ListState::new(),
            model_cursor: ListState::new(),
            storage_cursor: ListState::new(),
            cards: ListState::new(),
            status: StatusMessage::with_auto_clear(STATUS_TTL),
            show_help: false,
            should_quit: false,
            tick: 0,
            theme_name: super::theme::current_theme_name().to_string(),
            mouse_enabled: true,
            reload_requested: false,
        };
        app.apply_frame(frame);
        app
    }

    #[must_use]
    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme_name = theme.to_string();
        self
    }

    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// The frame currently on screen.
    #[must_use]
    pub const fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub const fn source(&self) -> &FeedSource {
        &self.source
    }

    #[must_use]
    pub const fn session(&self) -> &CatalogSession {
        &self.session
    }

    /// Hand the result of a background load to the session.
    pub fn on_loaded(&mut self, outcome: Result<ListingStore, String>) {
        let frame = match outcome {
            Ok(store) => {
                self.status.set(format!("Loaded {} listings", store.len()));
                self.session.load_ready(store)
            }
            Err(message) => self.session.load_failed(message),
        };
        self.cards.go_first();
        self.apply_frame(frame);
    }

    /// Discard this session and start a new one with a fresh load.
    ///
    /// The failed or loaded session is not retried; only the selection
    /// carries over.
    pub fn request_reload(&mut self) {
        self.session = CatalogSession::new(self.session.selection().clone());
        let frame = self.session.frame();
        self.apply_frame(frame);
        self.reload_requested = true;
        self.status
            .set(format!("Starting a new session from {}", self.source));
    }

    /// Consume a pending reload request.
    pub fn take_reload_request(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    /// Forward a user event to the session and show the resulting frame.
    pub fn dispatch(&mut self, event: UserEvent) {
        let frame = self.session.handle(event);
        self.apply_frame(frame);
    }

    fn apply_frame(&mut self, frame: RenderFrame) {
        if frame.scroll_to_top {
            self.cards.go_first();
        }
        self.cards.resize(frame.cards.len());
        self.carrier_cursor.resize(frame.carriers.len());
        self.model_cursor.resize(frame.models.len());
        self.storage_cursor.resize(frame.storages.len());
        self.frame = frame;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_cursor(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Carriers => &mut self.carrier_cursor,
            Focus::Models => &mut self.model_cursor,
            Focus::Storages => &mut self.storage_cursor,
            Focus::Cards => &mut self.cards,
        }
    }

    pub fn cursor_next(&mut self) {
        self.focused_cursor().select_next();
    }

    pub fn cursor_prev(&mut self) {
        self.focused_cursor().select_prev();
    }

    pub fn cursor_first(&mut self) {
        self.focused_cursor().go_first();
    }

    pub fn cursor_last(&mut self) {
        self.focused_cursor().go_last();
    }

    pub fn select_next_card(&mut self) {
        self.cards.select_next();
    }

    pub fn select_prev_card(&mut self) {
        self.cards.select_prev();
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&ListingCard> {
        self.frame.cards.get(self.cards.selected)
    }

    // ------------------------------------------------------------------
    // Catalog actions
    // ------------------------------------------------------------------

    /// Activate whatever sits under the cursor of the focused panel.
    pub fn activate(&mut self) {
        let event = match self.focus {
            Focus::Carriers => self
                .frame
                .carriers
                .get(self.carrier_cursor.selected)
                .map(|chip| UserEvent::ToggleCarrier(chip.carrier)),
            Focus::Models => self
                .frame
                .models
                .get(self.model_cursor.selected)
                .map(|chip| UserEvent::SelectModel(chip.value.clone())),
            Focus::Storages => self
                .frame
                .storages
                .get(self.storage_cursor.selected)
                .map(|chip| UserEvent::SelectStorage(chip.value.clone())),
            Focus::Cards => {
                self.show_selected_link();
                None
            }
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Toggle the carrier at 1-based position `n` of the carrier row.
    pub fn toggle_carrier_at(&mut self, n: usize) {
        if let Some(carrier) = n.checked_sub(1).and_then(|i| Carrier::ALL.get(i)) {
            self.carrier_cursor.selected = n - 1;
            self.dispatch(UserEvent::ToggleCarrier(*carrier));
        }
    }

    pub fn cycle_sort(&mut self, forward: bool) {
        let current = self.frame.selection.sort_key;
        let key = if forward {
            current.next()
        } else {
            current.prev()
        };
        self.dispatch(UserEvent::SetSortKey(key));
        self.status.set(format!("並び替え: {}", key.display_name()));
    }

    pub fn toggle_pricing_mode(&mut self) {
        let mode = self.frame.selection.pricing_mode.next();
        self.dispatch(UserEvent::SetPricingMode(mode));
        self.status.set(format!("価格表示: {}", mode.display_name()));
    }

    pub fn show_more(&mut self) {
        if self.session.can_show_more() {
            self.dispatch(UserEvent::ShowMore);
        }
    }

    pub fn collapse(&mut self) {
        if self.session.can_collapse() {
            self.dispatch(UserEvent::Collapse);
        }
    }

    fn show_selected_link(&mut self) {
        let message = match self.selected_card() {
            Some(card) if !card.url.is_empty() => card.url.clone(),
            Some(_) => "No link for this listing".to_string(),
            None => return,
        };
        self.status.set(message);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_theme(&mut self) {
        let name = super::theme::toggle_theme();
        self.theme_name = name.to_string();
        self.status.set(format!("Theme: {name}"));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Choice, LoadStatus, PricingMode, SortKey};
    use crate::model::Listing;
    use std::path::PathBuf;

    fn store() -> ListingStore {
        let mut listings = Vec::new();
        for (i, carrier) in Carrier::ALL.into_iter().enumerate() {
            let offset = i64::try_from(i).unwrap() * 1000;
            listings.push(Listing::new(carrier, "iPhone 15", "128GB", 120_000 + offset));
            listings.push(Listing::new(carrier, "iPhone 16", "256GB", 150_000 + offset));
        }
        ListingStore::new(listings)
    }

    fn loaded_app() -> CatalogApp {
        let mut app = CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        );
        app.on_loaded(Ok(store()));
        app
    }

    #[test]
    fn test_starts_loading() {
        let app = CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        );
        assert_eq!(app.frame().status, LoadStatus::Loading);
        assert_eq!(app.cards.total, 0);
    }

    #[test]
    fn test_load_failure_is_shown() {
        let mut app = CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        );
        app.on_loaded(Err("HTTP error! status: 404".to_string()));
        assert!(matches!(app.frame().status, LoadStatus::Failed { .. }));
    }

    #[test]
    fn test_show_more_and_collapse_move_cursor() {
        let mut app = loaded_app();
        assert_eq!(app.frame().cards.len(), 5);

        app.show_more();
        assert_eq!(app.frame().cards.len(), 10);

        app.cards.go_last();
        assert_eq!(app.cards.selected, 9);

        app.collapse();
        assert_eq!(app.frame().cards.len(), 5);
        assert_eq!(app.cards.selected, 0);
    }

    #[test]
    fn test_activate_model_chip() {
        let mut app = loaded_app();
        app.focus = Focus::Models;
        // Chips: All, iPhone 16, iPhone 15
        app.cursor_next();
        app.activate();
        assert_eq!(
            app.frame().selection.model,
            Choice::Only("iPhone 16".to_string())
        );
        assert_eq!(app.frame().matching_count, 6);
    }

    #[test]
    fn test_toggle_carrier_by_number() {
        let mut app = loaded_app();
        app.toggle_carrier_at(1);
        assert!(!app.frame().selection.has_carrier(Carrier::Rakuten));
        assert_eq!(app.frame().matching_count, 10);

        app.toggle_carrier_at(0);
        app.toggle_carrier_at(7);
        assert_eq!(app.frame().matching_count, 10);
    }

    #[test]
    fn test_cycle_sort_and_pricing() {
        let mut app = loaded_app();
        app.cycle_sort(true);
        assert_eq!(app.frame().selection.sort_key, SortKey::PriceDescending);
        app.cycle_sort(false);
        assert_eq!(app.frame().selection.sort_key, SortKey::PriceAscending);

        app.toggle_pricing_mode();
        assert_eq!(app.frame().selection.pricing_mode, PricingMode::OneTime);
        assert_eq!(app.frame().cards[0].unit, "一括");
    }

    #[test]
    fn test_reload_keeps_selection() {
        let mut app = loaded_app();
        app.toggle_carrier_at(2);
        app.request_reload();

        assert!(app.take_reload_request());
        assert!(!app.take_reload_request());
        assert_eq!(app.frame().status, LoadStatus::Loading);
        assert!(!app.frame().selection.has_carrier(Carrier::Ahamo));
    }

    #[test]
    fn test_reload_after_failure_starts_new_session() {
        let mut app = CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        );
        app.on_loaded(Err("HTTP error! status: 500".to_string()));
        assert!(app.session().load_error().is_some());

        app.request_reload();
        assert!(app.session().load_error().is_none());
        assert!(app.session().is_loading());
        let status = app.status.peek().unwrap_or_default();
        assert!(status.starts_with("Starting a new session"), "{status}");
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = loaded_app();
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focus, Focus::Carriers);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Cards);
    }
}
