//! Reusable widgets for the catalog TUI.

use crate::tui::theme::{Styles, chip, colors};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{required_width}x{required_height}"),
                Style::default().fg(colors().accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a centered message in a bordered box (loading, errors, no results).
pub fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>, border: Color) {
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Display width of a chip with its padding and separator.
fn chip_width(label: &str) -> usize {
    label.width() + 3
}

/// First chip to draw so that `cursor` fits into `width` columns.
#[must_use]
pub fn chip_window_start(labels: &[&str], cursor: usize, width: usize) -> usize {
    if labels.is_empty() {
        return 0;
    }
    let cursor = cursor.min(labels.len() - 1);
    let mut start = cursor;
    let mut used = chip_width(labels[cursor]);
    while start > 0 {
        let next = used + chip_width(labels[start - 1]);
        if next > width {
            break;
        }
        used = next;
        start -= 1;
    }
    start
}

/// One row of chips inside a titled block.
pub struct ChipRow<'a> {
    pub title: &'a str,
    /// `(label, selected)` per chip
    pub chips: Vec<(&'a str, bool)>,
    pub cursor: usize,
    pub focused: bool,
}

impl ChipRow<'_> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let labels: Vec<&str> = self.chips.iter().map(|(label, _)| *label).collect();
        let start = chip_window_start(&labels, self.cursor, inner_width);

        let mut spans = Vec::new();
        if start > 0 {
            spans.push(Span::styled("‹", Styles::text_muted()));
        }
        for (i, (label, selected)) in self.chips.iter().enumerate().skip(start) {
            spans.push(chip(label, *selected, self.focused && i == self.cursor));
            spans.push(Span::raw(" "));
        }

        let border_style = if self.focused {
            Styles::border_focused()
        } else {
            Styles::border()
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(format!(" {} ", self.title))
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_size_check() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(40, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
    }

    #[test]
    fn test_chip_window_keeps_cursor_visible() {
        let labels = ["全て", "iPhone 16 Pro", "iPhone 16", "iPhone 15", "iPhone SE"];
        assert_eq!(chip_window_start(&labels, 0, 80), 0);
        assert_eq!(chip_window_start(&labels, 4, 80), 0);
        // Only the cursor chip and its left neighbour fit.
        assert_eq!(chip_window_start(&labels, 4, 26), 3);
        assert_eq!(chip_window_start(&labels, 4, 5), 4);
        assert_eq!(chip_window_start(&[], 3, 10), 0);
    }
}
