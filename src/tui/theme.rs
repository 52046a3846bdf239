//! Centralized theme and color scheme for the catalog TUI.

use crate::model::Carrier;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for the catalog UI.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Badges
    pub lowest: Color,
    pub return_program: Color,

    // Prices
    pub price: Color,
    pub phases: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub chip_selected: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            lowest: Color::Red,
            return_program: Color::Blue,
            price: Color::LightYellow,
            phases: Color::Gray,
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            chip_selected: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            lowest: Color::Rgb(200, 0, 0),
            return_program: Color::Rgb(0, 70, 180),
            price: Color::Rgb(160, 90, 0),
            phases: Color::Rgb(100, 100, 100),
            primary: Color::Rgb(0, 100, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background: Color::Rgb(255, 255, 255),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),
            chip_selected: Color::Rgb(0, 100, 150),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            lowest: Color::LightRed,
            return_program: Color::LightBlue,
            price: Color::LightYellow,
            phases: Color::White,
            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            background: Color::Black,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(50, 50, 80),
            chip_selected: Color::LightCyan,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Brand-ish accent for a carrier name.
    #[must_use]
    pub const fn carrier_color(&self, carrier: Carrier) -> Color {
        match carrier {
            Carrier::Rakuten => Color::Magenta,
            Carrier::Ahamo => Color::LightCyan,
            Carrier::UqMobile => Color::LightMagenta,
            Carrier::Au => Color::LightRed,
            Carrier::SoftBank => Color::Gray,
            Carrier::Docomo => Color::Red,
        }
    }

    /// Background color for a card badge label.
    #[must_use]
    pub fn badge_color(&self, badge: &str) -> Color {
        match badge {
            crate::catalog::LOWEST_BADGE => self.lowest,
            crate::catalog::RETURN_PROGRAM_BADGE => self.return_program,
            _ => self.muted,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn price() -> Style {
        Style::default().fg(colors().price).bold()
    }

    pub fn selected() -> Style {
        Style::default().bg(colors().selection).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent).bold()
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error).bold()
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a card badge (`最安`, `返却P`)
pub fn card_badge(badge: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {badge} "),
        Style::default()
            .fg(scheme.badge_fg_light)
            .bg(scheme.badge_color(badge))
            .bold(),
    )
}

/// Render a chip; `cursor` marks the chip under keyboard focus.
pub fn chip(label: &str, selected: bool, cursor: bool) -> Span<'static> {
    let scheme = colors();
    let mut style = if selected {
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.chip_selected)
            .bold()
    } else {
        Style::default().fg(scheme.text_muted)
    };
    if cursor {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    Span::styled(format!(" {label} "), style)
}

/// Render a filter badge showing current state
pub fn filter_badge(label: &str, value: &str) -> Vec<Span<'static>> {
    let scheme = colors();
    vec![
        Span::styled(format!("{label}: "), Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!(" {value} "),
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.accent)
                .bold(),
        ),
    ]
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Key hints shown in the footer
pub struct FooterHints;

impl FooterHints {
    /// Hints for the focused panel
    pub fn for_focus(focus: super::app::Focus) -> Vec<(&'static str, &'static str)> {
        use super::app::Focus;
        let mut hints = match focus {
            Focus::Carriers => vec![("←→", "move"), ("Space", "toggle")],
            Focus::Models | Focus::Storages => vec![("←→", "move"), ("Enter", "select")],
            Focus::Cards => vec![("↑↓/jk", "navigate"), ("Enter", "link")],
        };
        hints.extend(Self::global());
        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "focus"),
            ("m", "more"),
            ("c", "collapse"),
            ("s", "sort"),
            ("p", "pricing"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_theme_rotation() {
        let theme = Theme::dark();
        assert_eq!(theme.next().name, "light");
        assert_eq!(theme.next().next().name, "high-contrast");
        assert_eq!(theme.next().next().next().name, "dark");
    }

    #[test]
    fn test_badge_colors() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.badge_color(crate::catalog::LOWEST_BADGE), scheme.lowest);
        assert_eq!(
            scheme.badge_color(crate::catalog::RETURN_PROGRAM_BADGE),
            scheme.return_program
        );
        assert_eq!(scheme.badge_color("other"), scheme.muted);
    }

    #[test]
    fn test_footer_hints_spans() {
        let spans = render_footer_hints(&[("q", "quit"), ("?", "help")]);
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[q]");
    }
}
