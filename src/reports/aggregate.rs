//! Pure aggregation functions over expense collections
//!
//! Every bucket accumulates the *monthly-equivalent* value of each expense,
//! whatever the bucket width, so categories and months stay comparable
//! regardless of how individual amounts were quoted. Callers pass `today`
//! explicitly; nothing here reads the clock.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Months, NaiveDate};

use crate::calc::normalize;
use crate::models::{Category, Expense, UserSettings};

/// Sum monthly-equivalent cost per category
///
/// Categories with no expenses are absent from the result, not zero-filled.
pub fn monthly_by_category(
    expenses: &[Expense],
    settings: &UserSettings,
) -> HashMap<Category, f64> {
    let mut totals = HashMap::new();

    for expense in expenses {
        let policy = settings.policy_for(expense.category);
        let normalized = normalize(expense, &policy, settings.age);
        *totals.entry(expense.category).or_insert(0.0) += normalized.monthly;
    }

    totals
}

/// Sum monthly-equivalent cost per calendar month (`YYYY-MM`), sorted
pub fn monthly_by_month(expenses: &[Expense], settings: &UserSettings) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        let policy = settings.policy_for(expense.category);
        let normalized = normalize(expense, &policy, settings.age);
        *totals.entry(expense.month_key()).or_insert(0.0) += normalized.monthly;
    }

    totals
}

/// Keep only expenses dated within `[start, end]`, inclusive on both ends
pub fn filter_by_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// The first and last day of `today`'s calendar month
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);
    (first, last)
}

/// The first and last day of `today`'s calendar year
pub fn year_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
    let last = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
    (first, last)
}

/// Expenses dated in `today`'s calendar month
pub fn current_month(expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
    let (start, end) = month_bounds(today);
    filter_by_date_range(expenses, start, end)
}

/// Expenses dated in `today`'s calendar year
pub fn current_year(expenses: &[Expense], today: NaiveDate) -> Vec<Expense> {
    let (start, end) = year_bounds(today);
    filter_by_date_range(expenses, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseKind, Frequency, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(
        category: Category,
        y: i32,
        m: u32,
        d: u32,
        amount: i64,
        kind: ExpenseKind,
    ) -> Expense {
        Expense::new(date(y, m, d), category, Money::from_yen(amount), kind)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_by_category_buckets() {
        let settings = UserSettings::default();
        let expenses = vec![
            expense(Category::Food, 2026, 3, 1, 3000, ExpenseKind::Monthly),
            expense(Category::Food, 2026, 3, 10, 2000, ExpenseKind::Monthly),
            expense(Category::Housing, 2026, 3, 1, 60000, ExpenseKind::Monthly),
        ];

        let totals = monthly_by_category(&expenses, &settings);
        assert_eq!(totals.len(), 2);
        assert_close(totals[&Category::Food], 5000.0);
        assert_close(totals[&Category::Housing], 60000.0);
        assert!(!totals.contains_key(&Category::Travel));
    }

    #[test]
    fn test_bucket_sums_conserve_total() {
        let mut settings = UserSettings::default();
        settings.age = 40;
        settings.set_policy(Category::Party, Frequency::Irregular, 6);

        let expenses = vec![
            expense(Category::Food, 2026, 1, 5, 500, ExpenseKind::Once),
            expense(Category::Party, 2026, 1, 20, 5000, ExpenseKind::Once),
            expense(Category::Housing, 2026, 2, 1, 60000, ExpenseKind::Monthly),
            expense(Category::Other, 2026, 2, 15, 1000000, ExpenseKind::Lifetime),
            expense(Category::Utilities, 2026, 3, 3, 24000, ExpenseKind::Yearly),
        ];

        let individual_sum: f64 = expenses
            .iter()
            .map(|e| normalize(e, &settings.policy_for(e.category), settings.age).monthly)
            .sum();

        let by_category: f64 = monthly_by_category(&expenses, &settings).values().sum();
        let by_month: f64 = monthly_by_month(&expenses, &settings).values().sum();

        assert_close(by_category, individual_sum);
        assert_close(by_month, individual_sum);
    }

    #[test]
    fn test_by_month_keys() {
        let settings = UserSettings::default();
        let expenses = vec![
            expense(Category::Food, 2026, 1, 5, 3000, ExpenseKind::Monthly),
            expense(Category::Food, 2026, 1, 25, 3000, ExpenseKind::Monthly),
            expense(Category::Food, 2025, 12, 31, 3000, ExpenseKind::Monthly),
        ];

        let totals = monthly_by_month(&expenses, &settings);
        let keys: Vec<_> = totals.keys().cloned().collect();
        assert_eq!(keys, vec!["2025-12".to_string(), "2026-01".to_string()]);
        assert_close(totals["2026-01"], 6000.0);
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let expenses = vec![
            expense(Category::Food, 2026, 3, 9, 1, ExpenseKind::Once),
            expense(Category::Food, 2026, 3, 10, 2, ExpenseKind::Once),
            expense(Category::Food, 2026, 3, 15, 3, ExpenseKind::Once),
            expense(Category::Food, 2026, 3, 16, 4, ExpenseKind::Once),
        ];

        let filtered = filter_by_date_range(&expenses, date(2026, 3, 10), date(2026, 3, 15));
        let amounts: Vec<i64> = filtered.iter().map(|e| e.amount.yen()).collect();
        assert_eq!(amounts, vec![2, 3]);
    }

    #[test]
    fn test_filter_single_day_range() {
        let expenses = vec![
            expense(Category::Food, 2026, 3, 9, 1, ExpenseKind::Once),
            expense(Category::Food, 2026, 3, 10, 2, ExpenseKind::Once),
            expense(Category::Food, 2026, 3, 10, 3, ExpenseKind::Once),
        ];

        let d = date(2026, 3, 10);
        let filtered = filter_by_date_range(&expenses, d, d);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.date == d));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(date(2026, 2, 14)),
            (date(2026, 2, 1), date(2026, 2, 28))
        );
        assert_eq!(
            month_bounds(date(2024, 2, 14)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            month_bounds(date(2026, 12, 31)),
            (date(2026, 12, 1), date(2026, 12, 31))
        );
    }

    #[test]
    fn test_current_month_and_year() {
        let expenses = vec![
            expense(Category::Food, 2026, 3, 1, 1, ExpenseKind::Once),
            expense(Category::Food, 2026, 2, 28, 2, ExpenseKind::Once),
            expense(Category::Food, 2025, 12, 31, 3, ExpenseKind::Once),
        ];

        let today = date(2026, 3, 15);
        assert_eq!(current_month(&expenses, today).len(), 1);
        assert_eq!(current_year(&expenses, today).len(), 2);
    }
}
