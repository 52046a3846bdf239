//! Model-name normalization: which iPhone generation a listing belongs to.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static GENERATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"iPhone\s*(\d+)").expect("static regex"));

/// Generation parsed from a model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelGeneration {
    /// Numbered line, e.g. `iPhone 16 Pro` → 16
    Numbered(u64),
    /// Any "SE" model; ranks below every numbered generation
    SpecialEdition,
    /// No recognizable generation marker
    Unrecognized,
}

impl ModelGeneration {
    /// Classify a model name.
    ///
    /// An `SE` marker anywhere wins over a number, so `iPhone SE (第3世代)`
    /// is a special edition rather than generation 3.
    #[must_use]
    pub fn parse(model: &str) -> Self {
        if model.contains("SE") {
            return Self::SpecialEdition;
        }
        GENERATION_PATTERN
            .captures(model)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .map_or(Self::Unrecognized, Self::Numbered)
    }

    /// Numeric rank used for "newest first" ordering.
    #[must_use]
    pub const fn rank(self) -> i128 {
        match self {
            Self::Numbered(n) => n as i128,
            Self::SpecialEdition => -1,
            Self::Unrecognized => 0,
        }
    }
}

/// Orders model names newest generation first, then alphabetically.
#[must_use]
pub fn compare_newest_first(a: &str, b: &str) -> Ordering {
    let rank_a = ModelGeneration::parse(a).rank();
    let rank_b = ModelGeneration::parse(b).rank();
    rank_b.cmp(&rank_a).then_with(|| locale_compare(a, b))
}

/// Human-oriented string ordering: case-insensitive first, then exact.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered() {
        assert_eq!(
            ModelGeneration::parse("iPhone 16 Pro"),
            ModelGeneration::Numbered(16)
        );
        assert_eq!(
            ModelGeneration::parse("iPhone16e"),
            ModelGeneration::Numbered(16)
        );
        assert_eq!(
            ModelGeneration::parse("Apple iPhone 11"),
            ModelGeneration::Numbered(11)
        );
    }

    #[test]
    fn test_parse_long_generation_number() {
        let generation = ModelGeneration::parse("iPhone 12345678901");
        assert_eq!(generation, ModelGeneration::Numbered(12_345_678_901));
        assert_eq!(
            compare_newest_first("iPhone 12345678901", "iPhone 17"),
            Ordering::Less
        );
    }

    #[test]
    fn test_parse_special_edition_beats_number() {
        let generation = ModelGeneration::parse("iPhone SE (第3世代)");
        assert_eq!(generation, ModelGeneration::SpecialEdition);
        assert_eq!(generation.rank(), -1);
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(ModelGeneration::parse("Pixel 9"), ModelGeneration::Unrecognized);
        assert_eq!(ModelGeneration::parse("17 Pro").rank(), 0);
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut models = vec![
            "iPhone SE (第3世代)",
            "iPhone 11",
            "iPhone 16 Pro",
            "iPhone 16",
            "iPhone 17",
            "Galaxy",
        ];
        models.sort_by(|a, b| compare_newest_first(a, b));
        assert_eq!(
            models,
            vec![
                "iPhone 17",
                "iPhone 16",
                "iPhone 16 Pro",
                "iPhone 11",
                "Galaxy",
                "iPhone SE (第3世代)",
            ]
        );
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("iPhone 16 plus", "iPhone 16 Pro"), Ordering::Less);
        assert_eq!(locale_compare("a", "B"), Ordering::Less);
        assert_eq!(locale_compare("x", "x"), Ordering::Equal);
    }
}
