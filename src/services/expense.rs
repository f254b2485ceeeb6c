//! Expense service
//!
//! CRUD operations over the expense collection. Each mutation validates the
//! record, applies it in memory and persists the complete collection.

use chrono::NaiveDate;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Category, Expense, ExpenseId, ExpenseKind, Money};
use crate::storage::Storage;

/// Minimum hex digits required when addressing an expense by ID prefix
const MIN_PREFIX_LEN: usize = 4;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense; assigns the ID and persists the collection
    pub fn add(
        &self,
        date: NaiveDate,
        category: Category,
        amount: Money,
        kind: ExpenseKind,
        memo: Option<String>,
    ) -> KakeiboResult<Expense> {
        let mut expense = Expense::new(date, category, amount, kind);
        if let Some(memo) = memo {
            expense = expense.with_memo(memo);
        }

        expense
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Replace an existing expense in full, keyed by its ID
    pub fn update(&self, expense: Expense) -> KakeiboResult<Expense> {
        if self.storage.expenses.get(expense.id)?.is_none() {
            return Err(KakeiboError::expense_not_found(expense.id.to_string()));
        }

        expense
            .validate()
            .map_err(|e| KakeiboError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        Ok(expense)
    }

    /// Delete an expense by ID
    pub fn delete(&self, id: ExpenseId) -> KakeiboResult<()> {
        if !self.storage.expenses.delete(id)? {
            return Err(KakeiboError::expense_not_found(id.to_string()));
        }

        self.storage.expenses.save()?;
        Ok(())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> KakeiboResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| KakeiboError::expense_not_found(id.to_string()))
    }

    /// List all expenses, newest first
    pub fn list(&self) -> KakeiboResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// List expenses in one category, newest first
    pub fn list_by_category(&self, category: Category) -> KakeiboResult<Vec<Expense>> {
        self.storage.expenses.get_by_category(category)
    }

    /// Find an expense by full UUID or by a unique short-ID prefix
    ///
    /// Accepts the display form (`exp-1a2b3c4d`) as well as a bare UUID or
    /// prefix. An ambiguous prefix is a validation error rather than a
    /// silent pick.
    pub fn find(&self, identifier: &str) -> KakeiboResult<Expense> {
        let bare = identifier.strip_prefix("exp-").unwrap_or(identifier);

        if let Ok(id) = ExpenseId::parse(bare) {
            return self.get(id);
        }

        if bare.len() < MIN_PREFIX_LEN {
            return Err(KakeiboError::Validation(format!(
                "Expense ID prefix '{}' is too short (need at least {} characters)",
                identifier, MIN_PREFIX_LEN
            )));
        }

        let matches: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| e.id.matches_prefix(bare))
            .collect();

        if matches.len() > 1 {
            return Err(KakeiboError::Validation(format!(
                "Expense ID prefix '{}' is ambiguous ({} matches)",
                identifier,
                matches.len()
            )));
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| KakeiboError::expense_not_found(identifier))
    }
}
