//! Filter selection and the listing predicate.

use super::price::PricingMode;
use super::sort::SortKey;
use crate::model::{Carrier, Listing, SENTINEL_COMPATIBLE_STORAGE, is_sentinel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Label of the catch-all chip.
pub const ALL_LABEL: &str = "All";

/// A single-valued chip selection: everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// Whether `value` is accepted by this choice.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The selected value, or `None` for `All`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        if value == ALL_LABEL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

impl From<String> for Choice {
    fn from(value: String) -> Self {
        if value == ALL_LABEL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<Choice> for String {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::All => ALL_LABEL.to_string(),
            Choice::Only(v) => v,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(ALL_LABEL))
    }
}

/// Everything the user has chosen to narrow and order the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub carriers: BTreeSet<Carrier>,
    pub model: Choice,
    pub storage: Choice,
    pub pricing_mode: PricingMode,
    pub sort_key: SortKey,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            carriers: Carrier::ALL.into_iter().collect(),
            model: Choice::All,
            storage: Choice::All,
            pricing_mode: PricingMode::default(),
            sort_key: SortKey::default(),
        }
    }
}

impl FilterSelection {
    /// Add the carrier if absent, remove it if present.
    ///
    /// Returns whether the carrier is selected afterwards.
    pub fn toggle_carrier(&mut self, carrier: Carrier) -> bool {
        if self.carriers.remove(&carrier) {
            false
        } else {
            self.carriers.insert(carrier);
            true
        }
    }

    #[must_use]
    pub fn has_carrier(&self, carrier: Carrier) -> bool {
        self.carriers.contains(&carrier)
    }
}

/// Storage match with the sentinel leniency.
///
/// A sentinel ("minimum capacity") listing shows up under the common base
/// capacities so single-price carriers are not hidden by a storage filter.
#[must_use]
pub fn storage_matches(listing_storage: &str, selected: &Choice) -> bool {
    match selected {
        Choice::All => true,
        Choice::Only(wanted) if is_sentinel(listing_storage) => {
            SENTINEL_COMPATIBLE_STORAGE.contains(&wanted.as_str())
        }
        Choice::Only(wanted) => listing_storage == wanted,
    }
}

/// Whether `listing` passes every filter in `selection`.
#[must_use]
pub fn passes(listing: &Listing, selection: &FilterSelection) -> bool {
    selection.carriers.contains(&listing.carrier)
        && selection.model.accepts(&listing.model)
        && storage_matches(&listing.storage, &selection.storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::STORAGE_SENTINEL;

    fn iphone15(carrier: Carrier, storage: &str) -> Listing {
        Listing::new(carrier, "iPhone 15", storage, 100_000)
    }

    #[test]
    fn test_default_selection_accepts_everything() {
        let selection = FilterSelection::default();
        for carrier in Carrier::ALL {
            assert!(passes(&iphone15(carrier, "128GB"), &selection));
        }
    }

    #[test]
    fn test_carrier_must_be_selected() {
        let mut selection = FilterSelection::default();
        assert!(!selection.toggle_carrier(Carrier::Au));
        assert!(!passes(&iphone15(Carrier::Au, "128GB"), &selection));
        assert!(passes(&iphone15(Carrier::Docomo, "128GB"), &selection));
        assert!(selection.toggle_carrier(Carrier::Au));
        assert!(selection.has_carrier(Carrier::Au));
    }

    #[test]
    fn test_empty_carrier_set_rejects_all() {
        let selection = FilterSelection {
            carriers: BTreeSet::new(),
            ..FilterSelection::default()
        };
        assert!(!passes(&iphone15(Carrier::Rakuten, "128GB"), &selection));
    }

    #[test]
    fn test_model_is_exact_match() {
        let selection = FilterSelection {
            model: Choice::from("iPhone 15"),
            ..FilterSelection::default()
        };
        assert!(passes(&iphone15(Carrier::Au, "128GB"), &selection));
        let pro = Listing::new(Carrier::Au, "iPhone 15 Pro", "128GB", 1);
        assert!(!passes(&pro, &selection));
    }

    #[test]
    fn test_sentinel_storage_leniency() {
        let sentinel = iphone15(Carrier::SoftBank, STORAGE_SENTINEL);
        for accepted in ["128GB", "64GB", "256GB"] {
            assert!(storage_matches(&sentinel.storage, &Choice::from(accepted)));
        }
        assert!(!storage_matches(&sentinel.storage, &Choice::from("512GB")));
        assert!(!storage_matches(&sentinel.storage, &Choice::from("1TB")));
    }

    #[test]
    fn test_regular_storage_is_exact_match() {
        assert!(storage_matches("256GB", &Choice::from("256GB")));
        assert!(!storage_matches("256GB", &Choice::from("128GB")));
        assert!(storage_matches("256GB", &Choice::All));
    }

    #[test]
    fn test_choice_serde_uses_all_label() {
        assert_eq!(serde_json::to_string(&Choice::All).unwrap(), "\"All\"");
        let choice: Choice = serde_json::from_str("\"128GB\"").unwrap();
        assert_eq!(choice, Choice::Only("128GB".to_string()));
        assert_eq!(choice.to_string(), "128GB");
    }
}
