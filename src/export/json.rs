//! JSON export functionality
//!
//! Exports the complete data set to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{Expense, UserSettings};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expense records
    pub expenses: Vec<Expense>,

    /// The user settings singleton
    pub settings: UserSettings,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expense records
    pub expense_count: usize,

    /// Date of the earliest expense
    pub earliest_expense: Option<String>,

    /// Date of the latest expense
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> KakeiboResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let settings = storage.settings.get()?;

        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            earliest_expense,
            latest_expense,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            settings,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id) {
                return Err(format!("Duplicate expense id: {}", expense.id));
            }
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata count mismatch: {} declared, {} present",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> KakeiboResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}
