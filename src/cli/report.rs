//! Reporting CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::error::KakeiboResult;
use crate::reports::aggregate::{month_bounds, year_bounds};
use crate::reports::{CategoryReport, MonthlyReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-category cost summary in monthly-equivalent terms
    Summary {
        /// Start date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
        /// Restrict to the current calendar month
        #[arg(long, conflicts_with_all = ["from", "to", "year"])]
        month: bool,
        /// Restrict to the current calendar year
        #[arg(long, conflicts_with_all = ["from", "to", "month"])]
        year: bool,
    },

    /// Month-by-month cost trend
    Monthly,
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> KakeiboResult<()> {
    match cmd {
        ReportCommands::Summary {
            from,
            to,
            month,
            year,
        } => {
            let today = Local::now().date_naive();
            let range = if month {
                Some(month_bounds(today))
            } else if year {
                Some(year_bounds(today))
            } else {
                from.zip(to)
            };

            let report = CategoryReport::generate(storage, range)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Monthly => {
            let report = MonthlyReport::generate(storage)?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}
