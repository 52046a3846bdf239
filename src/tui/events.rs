//! Event handling for the catalog TUI.
//!
//! Terminal input is polled with a tick timeout; feed loads run on a worker
//! thread and arrive as [`Event::Loaded`] so the screen never blocks.

use super::app::CatalogApp;
use crate::model::ListingStore;
use crate::parsers::FeedSource;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

/// Outcome of a background load, with the error already rendered for users.
pub type LoadOutcome = Result<ListingStore, String>;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick
    Tick,
    /// Resize event
    Resize(u16, u16),
    /// A feed load finished
    Loaded(LoadOutcome),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
    loader: Option<Receiver<LoadOutcome>>,
}

impl EventHandler {
    /// Create a new event handler
    #[must_use]
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
            loader: None,
        }
    }

    /// Start loading `source` on a worker thread.
    ///
    /// A load still in flight is abandoned; its result is dropped.
    pub fn start_load(&mut self, source: FeedSource) {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let outcome = crate::pipeline::load_store(&source).map_err(|e| {
                tracing::warn!("Failed to load {}: {}", source, e);
                e.user_message()
            });
            // The receiver is gone if the UI quit or restarted the load.
            let _ = tx.send(outcome);
        });
        self.loader = Some(rx);
    }

    /// Whether a load is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Poll for the next event
    pub fn next(&mut self) -> Result<Event, std::io::Error> {
        if let Some(outcome) = self.poll_loader() {
            return Ok(Event::Loaded(outcome));
        }

        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }

    fn poll_loader(&mut self) -> Option<LoadOutcome> {
        let rx = self.loader.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.loader = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.loader = None;
                Some(Err("loader thread exited without a result".to_string()))
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut CatalogApp, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => app.toggle_help(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => app.cursor_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_card(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_card(),
        KeyCode::Home | KeyCode::Char('g') => app.cursor_first(),
        KeyCode::End | KeyCode::Char('G') => app.cursor_last(),
        KeyCode::PageUp => {
            use super::state::ListNavigation;
            app.cards.page_up();
        }
        KeyCode::PageDown => {
            use super::state::ListNavigation;
            app.cards.page_down();
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char(c @ '1'..='6') => {
            app.toggle_carrier_at(c as usize - '0' as usize);
        }
        KeyCode::Char('m' | '+') => app.show_more(),
        KeyCode::Char('c' | '-') => app.collapse(),
        KeyCode::Char('s') => app.cycle_sort(true),
        KeyCode::Char('S') => app.cycle_sort(false),
        KeyCode::Char('p') => app.toggle_pricing_mode(),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Char('T') => app.toggle_theme(),
        _ => {}
    }
}

/// Handle mouse events: the wheel scrolls the card list.
pub fn handle_mouse_event(app: &mut CatalogApp, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev_card(),
        MouseEventKind::ScrollDown => app.select_next_card(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FilterSelection, SortKey};
    use crate::model::{Carrier, Listing};
    use crate::tui::app::Focus;
    use std::path::PathBuf;

    fn app() -> CatalogApp {
        let mut app = CatalogApp::new(
            FilterSelection::default(),
            FeedSource::File(PathBuf::from("data.json")),
        );
        app.on_loaded(Ok(ListingStore::new(
            (0..8)
                .map(|i| Listing::new(Carrier::Au, "iPhone 15", "128GB", 100_000 + i))
                .collect(),
        )));
        app
    }

    fn press(app: &mut CatalogApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.frame().selection.sort_key, SortKey::PriceAscending);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_more_and_collapse_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.frame().cards.len(), 8);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.frame().cards.len(), 5);
    }

    #[test]
    fn test_digit_toggles_carrier() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.frame().selection.has_carrier(Carrier::Au));
        assert!(app.frame().is_no_results());
    }

    #[test]
    fn test_tab_and_card_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Models);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cards.selected, 2);
    }

    #[test]
    fn test_disconnected_loader_reports_error() {
        let mut handler = EventHandler::default();
        let (tx, rx) = mpsc::channel::<LoadOutcome>();
        drop(tx);
        handler.loader = Some(rx);
        assert!(matches!(handler.poll_loader(), Some(Err(_))));
        assert!(!handler.is_loading());
    }
}
