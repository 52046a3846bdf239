//! Cycling through the enum-valued selectors (sort order, pricing mode).

use crate::catalog::{PricingMode, SortKey};

/// Selector values that cycle on a single key press.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next value in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous value in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the value.
    fn display_name(&self) -> &str;
}

impl CycleFilter for SortKey {
    fn next(&self) -> Self {
        match self {
            Self::PriceAscending => Self::PriceDescending,
            Self::PriceDescending => Self::ModelNewest,
            Self::ModelNewest => Self::PriceAscending,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::PriceAscending => Self::ModelNewest,
            Self::PriceDescending => Self::PriceAscending,
            Self::ModelNewest => Self::PriceDescending,
        }
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

impl CycleFilter for PricingMode {
    fn next(&self) -> Self {
        match self {
            Self::Recurring => Self::OneTime,
            Self::OneTime => Self::Recurring,
        }
    }

    fn prev(&self) -> Self {
        self.next()
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Recurring => "月々払い",
            Self::OneTime => "一括払い",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_cycle() {
        let mut key = SortKey::default();
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(key);
            key = key.next();
        }
        assert_eq!(key, SortKey::default());
        assert_eq!(
            seen,
            vec![
                SortKey::PriceAscending,
                SortKey::PriceDescending,
                SortKey::ModelNewest
            ]
        );
        assert_eq!(SortKey::PriceAscending.prev(), SortKey::ModelNewest);
    }

    #[test]
    fn test_pricing_mode_toggles() {
        assert_eq!(PricingMode::Recurring.next(), PricingMode::OneTime);
        assert_eq!(PricingMode::OneTime.next(), PricingMode::Recurring);
        assert_eq!(PricingMode::OneTime.prev(), PricingMode::Recurring);
        assert_eq!(PricingMode::Recurring.display_name(), "月々払い");
    }
}
