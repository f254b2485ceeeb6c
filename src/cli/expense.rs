//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::calc::Rate;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::KakeiboResult;
use crate::models::{Category, ExpenseKind, Money};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount in yen (e.g. "3000" or "¥3,000")
        amount: Money,
        /// Category key (e.g. food, housing, clothing)
        #[arg(short, long)]
        category: Category,
        /// How the amount is quoted: once, monthly, yearly or lifetime
        #[arg(short, long, default_value = "once")]
        kind: ExpenseKind,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Memo
        #[arg(short, long)]
        memo: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Display rate for the normalized column
        #[arg(long, default_value = "monthly")]
        mode: Rate,
        /// Filter by category
        #[arg(short, long)]
        category: Option<Category>,
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense details with all three normalized figures
    Show {
        /// Expense ID or unique prefix
        expense: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID or unique prefix
        expense: String,
        /// New amount
        #[arg(long)]
        amount: Option<Money>,
        /// New category
        #[arg(long)]
        category: Option<Category>,
        /// New kind
        #[arg(long)]
        kind: Option<ExpenseKind>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New memo (empty string clears it)
        #[arg(long)]
        memo: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID or unique prefix
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> KakeiboResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            kind,
            date,
            memo,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let expense = service.add(date, category, amount, kind, memo)?;
            println!(
                "Recorded {} {} on {} ({})",
                expense.amount,
                expense.category.label(),
                expense.date,
                expense.id
            );
        }

        ExpenseCommands::List {
            mode,
            category,
            limit,
        } => {
            let settings = storage.settings.get()?;
            let mut expenses = match category {
                Some(category) => service.list_by_category(category)?,
                None => service.list()?,
            };
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            print!("{}", format_expense_list(&expenses, &settings, mode));
        }

        ExpenseCommands::Show { expense } => {
            let expense = service.find(&expense)?;
            let settings = storage.settings.get()?;
            print!("{}", format_expense_details(&expense, &settings));
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            kind,
            date,
            memo,
        } => {
            let mut record = service.find(&expense)?;

            if let Some(amount) = amount {
                record.amount = amount;
            }
            if let Some(category) = category {
                record.category = category;
            }
            if let Some(kind) = kind {
                record.kind = kind;
            }
            if let Some(date) = date {
                record.date = date;
            }
            if let Some(memo) = memo {
                record.memo = if memo.trim().is_empty() {
                    None
                } else {
                    Some(memo)
                };
            }

            let updated = service.update(record)?;
            println!("Updated {}", updated.id);
        }

        ExpenseCommands::Delete { expense } => {
            let record = service.find(&expense)?;
            service.delete(record.id)?;
            println!("Deleted {}", record.id);
        }
    }

    Ok(())
}
