//! Cursor state for the card list and the chip rows.

/// Number of cards skipped per page-up/page-down action.
pub const PAGE_SIZE: usize = 5;

/// Trait for list-based navigation state.
///
/// Provides common selection and navigation methods for any view
/// that displays a selectable list of items.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Get the total number of items.
    fn total(&self) -> usize;

    /// Set the total number of items.
    fn set_total(&mut self, total: usize);

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    /// Move selection up by a page.
    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    /// Move selection down by a page.
    fn page_down(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 {
            self.set_selected((selected + PAGE_SIZE).min(total.saturating_sub(1)));
        }
    }

    /// Move to the first item.
    fn go_first(&mut self) {
        self.set_selected(0);
    }

    /// Move to the last item.
    fn go_last(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected(total.saturating_sub(1));
        }
    }
}

/// Plain selection cursor over `total` items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: 0,
            total: 0,
        }
    }

    /// Resize to `total` items, keeping the cursor in range.
    pub fn resize(&mut self, total: usize) {
        self.set_total(total);
        self.clamp_selection();
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_bounds() {
        let mut state = ListState::new();
        state.resize(3);
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        state.go_first();
        assert_eq!(state.selected, 0);
        state.go_last();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_resize_clamps() {
        let mut state = ListState::new();
        state.resize(10);
        state.go_last();
        state.resize(4);
        assert_eq!(state.selected, 3);
        state.resize(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_paging() {
        let mut state = ListState::new();
        state.resize(12);
        state.page_down();
        assert_eq!(state.selected, PAGE_SIZE);
        state.page_down();
        state.page_down();
        assert_eq!(state.selected, 11);
        state.page_up();
        assert_eq!(state.selected, 6);
    }
}
