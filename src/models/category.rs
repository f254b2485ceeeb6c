//! Expense category taxonomy and per-category policies
//!
//! The taxonomy is a fixed set of 13 categories. Each category carries a
//! frequency classification: `regular` categories recur at the cadence
//! implied by the expense's own kind, while `irregular` categories occur a
//! configured number of times per year no matter how the amount was quoted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KakeiboError;

/// The fixed expense category taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Housing,
    Transportation,
    Utilities,
    Healthcare,
    Entertainment,
    Education,
    Personal,
    Other,
    Clothing,
    Party,
    Travel,
    Appliance,
}

impl Category {
    /// All categories, in canonical display order
    pub const ALL: [Category; 13] = [
        Category::Food,
        Category::Housing,
        Category::Transportation,
        Category::Utilities,
        Category::Healthcare,
        Category::Entertainment,
        Category::Education,
        Category::Personal,
        Category::Other,
        Category::Clothing,
        Category::Party,
        Category::Travel,
        Category::Appliance,
    ];

    /// The stable lowercase key used on the wire and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Housing => "housing",
            Category::Transportation => "transportation",
            Category::Utilities => "utilities",
            Category::Healthcare => "healthcare",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Personal => "personal",
            Category::Other => "other",
            Category::Clothing => "clothing",
            Category::Party => "party",
            Category::Travel => "travel",
            Category::Appliance => "appliance",
        }
    }

    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "食費",
            Category::Housing => "住居費",
            Category::Transportation => "交通費",
            Category::Utilities => "光熱費",
            Category::Healthcare => "医療費",
            Category::Entertainment => "娯楽費",
            Category::Education => "教育費",
            Category::Personal => "個人支出",
            Category::Other => "その他",
            Category::Clothing => "衣服",
            Category::Party => "交際費",
            Category::Travel => "旅行",
            Category::Appliance => "家電",
        }
    }

    /// The built-in default policy for this category
    ///
    /// Most categories are regular. Clothing, party, travel and appliance
    /// purchases are treated as irregular with a typical yearly occurrence
    /// count.
    pub fn default_policy(&self) -> CategoryPolicy {
        match self {
            Category::Clothing => CategoryPolicy::irregular(4),
            Category::Party => CategoryPolicy::irregular(6),
            Category::Travel => CategoryPolicy::irregular(2),
            Category::Appliance => CategoryPolicy::irregular(1),
            _ => CategoryPolicy::regular(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = KakeiboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.key() == lower)
            .ok_or_else(|| {
                KakeiboError::Validation(format!(
                    "Unknown category '{}' (expected one of: food, housing, transportation, \
                     utilities, healthcare, entertainment, education, personal, other, \
                     clothing, party, travel, appliance)",
                    s
                ))
            })
    }
}

/// Frequency classification for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Recurs at the cadence implied by the expense kind itself
    #[default]
    Regular,
    /// Occurs a configured number of times per year
    Irregular,
}

impl Frequency {
    pub fn key(&self) -> &'static str {
        match self {
            Frequency::Regular => "regular",
            Frequency::Irregular => "irregular",
        }
    }

    /// Localized display label
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Regular => "定期的",
            Frequency::Irregular => "不定期",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Frequency {
    type Err = KakeiboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(Frequency::Regular),
            "irregular" => Ok(Frequency::Irregular),
            _ => Err(KakeiboError::Validation(format!(
                "Unknown frequency '{}' (expected 'regular' or 'irregular')",
                s
            ))),
        }
    }
}

/// How a category's expenses recur across a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    /// Frequency classification
    pub frequency: Frequency,
    /// Yearly occurrence count, meaningful only for irregular categories
    pub annual_count: u32,
}

impl CategoryPolicy {
    /// A regular policy; the occurrence count is unused
    pub const fn regular() -> Self {
        Self {
            frequency: Frequency::Regular,
            annual_count: 0,
        }
    }

    /// An irregular policy occurring `annual_count` times per year
    pub const fn irregular(annual_count: u32) -> Self {
        Self {
            frequency: Frequency::Irregular,
            annual_count,
        }
    }

    /// The effective occurrences per year, floored at 1
    ///
    /// A stored count of 0 behaves like 1 so the scaling never divides by
    /// zero and never drops an expense entirely.
    pub fn occurrences_per_year(&self) -> u32 {
        self.annual_count.max(1)
    }
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self::regular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.key().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "groceries".parse::<Category>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"food\"");

        let parsed: Category = serde_json::from_str("\"clothing\"").unwrap();
        assert_eq!(parsed, Category::Clothing);
    }

    #[test]
    fn test_default_policies() {
        assert_eq!(
            Category::Clothing.default_policy(),
            CategoryPolicy::irregular(4)
        );
        assert_eq!(Category::Party.default_policy(), CategoryPolicy::irregular(6));
        assert_eq!(Category::Travel.default_policy(), CategoryPolicy::irregular(2));
        assert_eq!(
            Category::Appliance.default_policy(),
            CategoryPolicy::irregular(1)
        );
        assert_eq!(Category::Food.default_policy(), CategoryPolicy::regular());
        assert_eq!(Category::Other.default_policy(), CategoryPolicy::regular());
    }

    #[test]
    fn test_occurrences_floor_at_one() {
        assert_eq!(CategoryPolicy::irregular(0).occurrences_per_year(), 1);
        assert_eq!(CategoryPolicy::irregular(1).occurrences_per_year(), 1);
        assert_eq!(CategoryPolicy::irregular(6).occurrences_per_year(), 6);
        assert_eq!(CategoryPolicy::regular().occurrences_per_year(), 1);
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("regular".parse::<Frequency>().unwrap(), Frequency::Regular);
        assert_eq!(
            "IRREGULAR".parse::<Frequency>().unwrap(),
            Frequency::Irregular
        );
        assert!("sometimes".parse::<Frequency>().is_err());
    }
}
