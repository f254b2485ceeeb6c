//! Expense repository for JSON storage
//!
//! Persists the whole expense collection to expenses.json as a bare JSON
//! array; every save rewrites the complete array. In-memory access is keyed
//! by id.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::KakeiboError;
use crate::models::{Category, Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk; a missing file reads as an empty collection
    pub fn load(&self) -> Result<(), KakeiboError> {
        let records: Vec<Expense> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in records {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save the complete expense collection to disk
    pub fn save(&self) -> Result<(), KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });

        write_json_atomic(&self.path, &records)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
        });
        Ok(records)
    }

    /// Get all expenses in one category, newest first
    pub fn get_by_category(&self, category: Category) -> Result<Vec<Expense>, KakeiboError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.category == category)
            .collect())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), KakeiboError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense; returns whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, KakeiboError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count stored expenses
    pub fn count(&self) -> Result<usize, KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Delete the backing file and clear memory (reset)
    pub fn purge(&self) -> Result<(), KakeiboError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();

        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                KakeiboError::Storage(format!(
                    "Failed to remove {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}
