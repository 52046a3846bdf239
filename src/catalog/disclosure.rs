//! Incremental disclosure ("show more" / "collapse") state machine.

use serde::{Deserialize, Serialize};

/// Number of results visible before any "show more".
pub const INITIAL_VISIBLE: usize = 5;

/// How many more results each "show more" reveals.
pub const VISIBLE_STEP: usize = 5;

/// Events that move the disclosure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureEvent {
    ShowMore,
    Collapse,
    FilterChanged,
    SortChanged,
    PricingModeChanged,
}

/// Result of feeding an event to [`DisclosureState::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Whether the event was enabled in the current state
    pub applied: bool,
    /// The view should scroll back to the top of the widget
    pub scroll_to_top: bool,
}

/// How many of the filtered and sorted results are exposed to the view.
///
/// `visible_count` is always a positive multiple of [`VISIBLE_STEP`],
/// starting at [`INITIAL_VISIBLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureState {
    visible_count: usize,
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisclosureState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_count: INITIAL_VISIBLE,
        }
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Whether more than the initial page is exposed.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.visible_count > INITIAL_VISIBLE
    }

    /// Whether "show more" is enabled for `matching_count` results.
    #[must_use]
    pub const fn can_show_more(&self, matching_count: usize) -> bool {
        matching_count > self.visible_count
    }

    /// Whether "collapse" is enabled.
    #[must_use]
    pub const fn can_collapse(&self) -> bool {
        self.is_expanded()
    }

    /// Results left hidden behind "show more".
    #[must_use]
    pub const fn remaining(&self, matching_count: usize) -> usize {
        matching_count.saturating_sub(self.visible_count)
    }

    /// Apply `event`; `matching_count` is the current filtered result count.
    ///
    /// Disabled events leave the state untouched and report `applied: false`.
    pub fn apply(&mut self, event: DisclosureEvent, matching_count: usize) -> Transition {
        match event {
            DisclosureEvent::ShowMore => {
                if !self.can_show_more(matching_count) {
                    return Transition::default();
                }
                self.visible_count += VISIBLE_STEP;
                Transition {
                    applied: true,
                    scroll_to_top: false,
                }
            }
            DisclosureEvent::Collapse => {
                if !self.can_collapse() {
                    return Transition::default();
                }
                self.reset();
                Transition {
                    applied: true,
                    scroll_to_top: true,
                }
            }
            DisclosureEvent::FilterChanged
            | DisclosureEvent::SortChanged
            | DisclosureEvent::PricingModeChanged => {
                self.reset();
                Transition {
                    applied: true,
                    scroll_to_top: false,
                }
            }
        }
    }

    fn reset(&mut self) {
        self.visible_count = INITIAL_VISIBLE;
    }
}
