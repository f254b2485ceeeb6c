//! CSV export functionality
//!
//! Writes one row per expense, with the raw record fields followed by the
//! three normalized figures under the current settings.

use std::io::Write;

use crate::calc::normalize;
use crate::error::{KakeiboError, KakeiboResult};
use crate::storage::Storage;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> KakeiboResult<()> {
    let settings = storage.settings.get()?;
    let expenses = storage.expenses.get_all()?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id", "date", "category", "type", "amount", "memo", "daily", "monthly", "yearly",
        ])
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    for expense in &expenses {
        let policy = settings.policy_for(expense.category);
        let normalized = normalize(expense, &policy, settings.age);

        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.date.to_string(),
                expense.category.to_string(),
                expense.kind.to_string(),
                expense.amount.yen().to_string(),
                expense.memo.clone().unwrap_or_default(),
                format!("{:.2}", normalized.daily),
                format!("{:.2}", normalized.monthly),
                format!("{:.2}", normalized.yearly),
            ])
            .map_err(|e| KakeiboError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

    Ok(())
}
