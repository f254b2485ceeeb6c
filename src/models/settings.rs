//! User settings singleton
//!
//! Holds the user's age (for lifetime amortization) and the sparse set of
//! per-category policy overrides. Field names stay camelCase on the wire to
//! match the JSON shape of the stored settings object.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryPolicy, Frequency};

/// A stored per-category policy override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPolicyEntry {
    /// Category this entry overrides
    pub category: Category,
    /// Frequency classification
    pub frequency: Frequency,
    /// Yearly occurrence count, meaningful only for irregular categories
    pub annual_count: u32,
}

impl CategoryPolicyEntry {
    /// The policy carried by this entry
    pub fn policy(&self) -> CategoryPolicy {
        CategoryPolicy {
            frequency: self.frequency,
            annual_count: self.annual_count,
        }
    }
}

/// The user settings singleton
///
/// Missing fields default-fill on read, so a partial or absent stored
/// object is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// User's age, used to compute the remaining horizon for lifetime
    /// expenses; validated to 1..=120 at the input boundary
    #[serde(default = "default_age")]
    pub age: u32,

    /// Sparse per-category overrides; categories without an entry resolve
    /// to their built-in default policy
    #[serde(default)]
    pub category_settings: Vec<CategoryPolicyEntry>,
}

fn default_age() -> u32 {
    30
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            age: default_age(),
            category_settings: Vec::new(),
        }
    }
}

impl UserSettings {
    /// Resolve the effective policy for a category
    ///
    /// Explicit override first, then the built-in default. The taxonomy is
    /// closed, so resolution is total and never fails.
    pub fn policy_for(&self, category: Category) -> CategoryPolicy {
        self.category_settings
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.policy())
            .unwrap_or_else(|| category.default_policy())
    }

    /// Check whether a category has an explicit override
    pub fn has_override(&self, category: Category) -> bool {
        self.category_settings
            .iter()
            .any(|entry| entry.category == category)
    }

    /// Upsert a per-category policy: replace if present, append if absent
    pub fn set_policy(&mut self, category: Category, frequency: Frequency, annual_count: u32) {
        let entry = CategoryPolicyEntry {
            category,
            frequency,
            annual_count,
        };

        match self
            .category_settings
            .iter_mut()
            .find(|e| e.category == category)
        {
            Some(existing) => *existing = entry,
            None => self.category_settings.push(entry),
        }
    }
}
