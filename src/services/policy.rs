//! Category policy service
//!
//! Reads and writes per-category frequency policies and estimates yearly
//! occurrence counts from the recorded history.

use chrono::{Months, NaiveDate};

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Category, CategoryPolicy, ExpenseKind, Frequency};
use crate::storage::Storage;

/// Service for category policy management
pub struct PolicyService<'a> {
    storage: &'a Storage,
}

impl<'a> PolicyService<'a> {
    /// Create a new policy service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Resolve the effective policy for a category
    ///
    /// Explicit user override first, then the built-in default; resolution
    /// never fails.
    pub fn policy_for(&self, category: Category) -> KakeiboResult<CategoryPolicy> {
        Ok(self.storage.settings.get()?.policy_for(category))
    }

    /// Upsert a per-category policy and persist the entire settings object
    pub fn set_policy(
        &self,
        category: Category,
        frequency: Frequency,
        annual_count: u32,
    ) -> KakeiboResult<()> {
        let mut settings = self.storage.settings.get()?;
        settings.set_policy(category, frequency, annual_count);
        self.storage.settings.set(settings)?;
        self.storage.settings.save()?;
        Ok(())
    }

    /// Estimate a category's yearly occurrence count from recorded history
    ///
    /// Counts `once`-kind expenses in the category dated within the trailing
    /// calendar year (one year back from today's month/day, both bounds
    /// inclusive). Recurring kinds are ignored: their amounts are assumed to
    /// already be sized correctly. With no matching records the currently
    /// configured count is returned unchanged.
    pub fn estimate_annual_count(&self, category: Category, today: NaiveDate) -> KakeiboResult<u32> {
        let cutoff = today
            .checked_sub_months(Months::new(12))
            .ok_or_else(|| KakeiboError::Validation(format!("Date out of range: {}", today)))?;

        let count = self
            .storage
            .expenses
            .get_all()?
            .iter()
            .filter(|e| {
                e.category == category
                    && e.kind == ExpenseKind::Once
                    && e.date >= cutoff
                    && e.date <= today
            })
            .count();

        if count == 0 {
            Ok(self.policy_for(category)?.annual_count)
        } else {
            Ok(count as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use crate::models::{Expense, ExpenseKind, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_once(storage: &Storage, category: Category, on: NaiveDate) {
        let expense = Expense::new(on, category, Money::from_yen(5000), ExpenseKind::Once);
        storage.expenses.upsert(expense).unwrap();
    }

    #[test]
    fn test_policy_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);

        service
            .set_policy(Category::Clothing, Frequency::Irregular, 5)
            .unwrap();

        let policy = service.policy_for(Category::Clothing).unwrap();
        assert_eq!(policy.frequency, Frequency::Irregular);
        assert_eq!(policy.annual_count, 5);

        // Persisted, not just in memory
        assert!(storage.paths().settings_file().exists());
    }

    #[test]
    fn test_policy_defaults_without_override() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);

        assert_eq!(
            service.policy_for(Category::Party).unwrap(),
            CategoryPolicy::irregular(6)
        );
        assert_eq!(
            service.policy_for(Category::Food).unwrap(),
            CategoryPolicy::regular()
        );
    }

    #[test]
    fn test_estimate_counts_trailing_year_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);
        let today = date(2026, 8, 6);

        // Three within the trailing year, one 400 days back
        add_once(&storage, Category::Clothing, date(2026, 7, 1));
        add_once(&storage, Category::Clothing, date(2026, 2, 14));
        add_once(&storage, Category::Clothing, date(2025, 9, 10));
        add_once(&storage, Category::Clothing, date(2025, 7, 2));

        let estimate = service
            .estimate_annual_count(Category::Clothing, today)
            .unwrap();
        assert_eq!(estimate, 3);
    }

    #[test]
    fn test_estimate_lower_bound_inclusive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);
        let today = date(2026, 8, 6);

        // Exactly one year back counts; one day before that does not.
        add_once(&storage, Category::Travel, date(2025, 8, 6));
        add_once(&storage, Category::Travel, date(2025, 8, 5));

        let estimate = service
            .estimate_annual_count(Category::Travel, today)
            .unwrap();
        assert_eq!(estimate, 1);
    }

    #[test]
    fn test_estimate_ignores_recurring_kinds() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);
        let today = date(2026, 8, 6);

        let monthly = Expense::new(
            date(2026, 7, 1),
            Category::Clothing,
            Money::from_yen(3000),
            ExpenseKind::Monthly,
        );
        storage.expenses.upsert(monthly).unwrap();
        add_once(&storage, Category::Clothing, date(2026, 7, 15));

        let estimate = service
            .estimate_annual_count(Category::Clothing, today)
            .unwrap();
        assert_eq!(estimate, 1);
    }

    #[test]
    fn test_estimate_without_matches_keeps_configured_count() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PolicyService::new(&storage);
        let today = date(2026, 8, 6);

        // Default for clothing is 4
        assert_eq!(
            service
                .estimate_annual_count(Category::Clothing, today)
                .unwrap(),
            4
        );

        // An explicit override is what gets echoed back
        service
            .set_policy(Category::Clothing, Frequency::Irregular, 9)
            .unwrap();
        assert_eq!(
            service
                .estimate_annual_count(Category::Clothing, today)
                .unwrap(),
            9
        );
    }
}
