//! Default values for iphone-monitor configuration.

use super::types::{SelectionDefaults, TuiConfig};
use crate::catalog::{PricingMode, SortKey};
use crate::model::Carrier;

/// Feed used when neither the CLI nor a config file names one.
pub const DEFAULT_FEED_SOURCE: &str = "data.json";

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "dark";

/// Theme names accepted by `tui.theme`.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            carriers: Carrier::ALL.to_vec(),
            pricing_mode: PricingMode::Recurring,
            sort: SortKey::PriceAscending,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FilterSelection;

    #[test]
    fn test_selection_defaults_match_filter_defaults() {
        assert_eq!(
            SelectionDefaults::default().to_selection(),
            FilterSelection::default()
        );
    }

    #[test]
    fn test_default_theme_is_valid() {
        assert!(VALID_THEMES.contains(&TuiConfig::default().theme.as_str()));
    }
}
