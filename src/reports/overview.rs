//! Overview reports
//!
//! Builds per-category and per-month summaries over the stored expenses,
//! with terminal and CSV output.

use std::io::Write;

use chrono::NaiveDate;

use crate::calc::normalize;
use crate::error::{KakeiboError, KakeiboResult};
use crate::models::{money::format_yen_f64, Category};
use crate::reports::aggregate::{filter_by_date_range, monthly_by_category, monthly_by_month};
use crate::storage::Storage;

/// Per-category breakdown row
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category
    pub category: Category,
    /// Summed monthly-equivalent cost
    pub monthly_total: f64,
    /// Number of expense records
    pub expense_count: usize,
    /// Share of the total monthly-equivalent cost
    pub percentage: f64,
}

/// Per-category cost report over an optional date range
#[derive(Debug, Clone)]
pub struct CategoryReport {
    /// Range the report covers, if restricted
    pub range: Option<(NaiveDate, NaiveDate)>,
    /// Rows, largest monthly total first
    pub rows: Vec<CategoryRow>,
    /// Grand totals across all rows
    pub total_daily: f64,
    pub total_monthly: f64,
    pub total_yearly: f64,
    /// Total number of expense records covered
    pub expense_count: usize,
}

impl CategoryReport {
    /// Generate a category report, optionally restricted to a date range
    pub fn generate(
        storage: &Storage,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> KakeiboResult<Self> {
        let settings = storage.settings.get()?;
        let mut expenses = storage.expenses.get_all()?;

        if let Some((start, end)) = range {
            expenses = filter_by_date_range(&expenses, start, end);
        }

        let mut total_daily = 0.0;
        let mut total_yearly = 0.0;
        let mut counts: std::collections::HashMap<Category, usize> =
            std::collections::HashMap::new();

        for expense in &expenses {
            let policy = settings.policy_for(expense.category);
            let normalized = normalize(expense, &policy, settings.age);
            total_daily += normalized.daily;
            total_yearly += normalized.yearly;
            *counts.entry(expense.category).or_insert(0) += 1;
        }

        let totals = monthly_by_category(&expenses, &settings);
        let total_monthly: f64 = totals.values().sum();

        let mut rows: Vec<CategoryRow> = totals
            .into_iter()
            .map(|(category, monthly_total)| {
                let percentage = if total_monthly == 0.0 {
                    0.0
                } else {
                    monthly_total / total_monthly * 100.0
                };
                CategoryRow {
                    category,
                    monthly_total,
                    expense_count: counts.get(&category).copied().unwrap_or(0),
                    percentage,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.monthly_total
                .partial_cmp(&a.monthly_total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(Self {
            range,
            rows,
            total_daily,
            total_monthly,
            total_yearly,
            expense_count: expenses.len(),
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match self.range {
            Some((start, end)) => {
                output.push_str(&format!("Cost Summary: {} to {}\n", start, end));
            }
            None => output.push_str("Cost Summary (all records)\n"),
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:>14} {:>7} {:>8}\n",
            "Category", "Monthly", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>14} {:>7} {:>7.1}%\n",
                row.category.label(),
                format_yen_f64(row.monthly_total),
                row.expense_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>7}\n",
            "TOTAL",
            format_yen_f64(self.total_monthly),
            self.expense_count
        ));
        output.push_str(&format!(
            "\nDaily equivalent:  {}\nYearly equivalent: {}\n",
            format_yen_f64(self.total_daily),
            format_yen_f64(self.total_yearly)
        ));

        output
    }

    /// Export the report rows as CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> KakeiboResult<()> {
        writeln!(writer, "Category,Monthly,Count,Percentage")
            .map_err(|e| KakeiboError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{},{:.2}",
                row.category, row.monthly_total, row.expense_count, row.percentage
            )
            .map_err(|e| KakeiboError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},{},100.00",
            self.total_monthly, self.expense_count
        )
        .map_err(|e| KakeiboError::Export(e.to_string()))?;

        Ok(())
    }
}

/// Per-month cost trend report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// (`YYYY-MM`, monthly-equivalent total) pairs in chronological order
    pub rows: Vec<(String, f64)>,
}

impl MonthlyReport {
    /// Generate a month-by-month report over all stored expenses
    pub fn generate(storage: &Storage) -> KakeiboResult<Self> {
        let settings = storage.settings.get()?;
        let expenses = storage.expenses.get_all()?;

        let rows = monthly_by_month(&expenses, &settings)
            .into_iter()
            .collect();

        Ok(Self { rows })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Monthly Trend\n");
        output.push_str(&"=".repeat(32));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for (month, total) in &self.rows {
            output.push_str(&format!("{:<10} {:>14}\n", month, format_yen_f64(*total)));
        }

        output
    }
}
