//! Option chips offered for the model and storage filters.

use super::filter::Choice;
use crate::model::{Listing, capacity_gb, compare_capacity, compare_newest_first};
use indexmap::IndexSet;
use serde::Serialize;

/// Label shown on the catch-all chip.
pub const ALL_CHIP_LABEL: &str = "全て";

/// Chips derived from the loaded listing set.
///
/// Both lists start with [`Choice::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogOptions {
    pub models: Vec<Choice>,
    pub storages: Vec<Choice>,
}

impl CatalogOptions {
    /// Distinct models (newest first) and storages (smallest first).
    ///
    /// Storage labels without a numeric capacity, including the sentinel,
    /// are left out even though they still take part in filtering.
    #[must_use]
    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut models: Vec<&str> = listings
            .iter()
            .map(|l| l.model.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        models.sort_by(|a, b| compare_newest_first(a, b));

        let mut storages: Vec<&str> = listings
            .iter()
            .map(|l| l.storage.as_str())
            .filter(|s| capacity_gb(s).is_some())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        storages.sort_by(|a, b| compare_capacity(a, b));

        Self {
            models: std::iter::once(Choice::All)
                .chain(models.into_iter().map(Choice::from))
                .collect(),
            storages: std::iter::once(Choice::All)
                .chain(storages.into_iter().map(Choice::from))
                .collect(),
        }
    }

    /// Whether `choice` is one of the offered model chips.
    #[must_use]
    pub fn offers_model(&self, choice: &Choice) -> bool {
        self.models.contains(choice)
    }

    /// Whether `choice` is one of the offered storage chips.
    #[must_use]
    pub fn offers_storage(&self, choice: &Choice) -> bool {
        self.storages.contains(choice)
    }
}

/// Display label for a model chip.
#[must_use]
pub fn model_chip_label(choice: &Choice) -> String {
    match choice {
        Choice::All => ALL_CHIP_LABEL.to_string(),
        Choice::Only(model) if model.starts_with("iPhone") => model.clone(),
        Choice::Only(model) => format!("iPhone {model}"),
    }
}

/// Display label for a storage chip.
#[must_use]
pub fn storage_chip_label(choice: &Choice) -> String {
    match choice {
        Choice::All => ALL_CHIP_LABEL.to_string(),
        Choice::Only(storage) => storage.clone(),
    }
}
