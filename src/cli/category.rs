//! Category policy CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::category::format_policy_list;
use crate::error::KakeiboResult;
use crate::models::{Category, Frequency};
use crate::services::PolicyService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their effective policies
    List,

    /// Set a category's frequency policy
    Set {
        /// Category key
        category: Category,
        /// Frequency classification: regular or irregular
        #[arg(short, long)]
        frequency: Frequency,
        /// Yearly occurrence count (irregular categories); keeps the
        /// current value when omitted
        #[arg(short = 'n', long)]
        count: Option<u32>,
    },

    /// Estimate a category's yearly occurrence count from the trailing year
    Estimate {
        /// Category key
        category: Category,
        /// Save the estimate as the category's irregular policy
        #[arg(long)]
        apply: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> KakeiboResult<()> {
    let service = PolicyService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let settings = storage.settings.get()?;
            print!("{}", format_policy_list(&settings));
        }

        CategoryCommands::Set {
            category,
            frequency,
            count,
        } => {
            let count = match count {
                Some(count) => count,
                None => service.policy_for(category)?.annual_count,
            };

            service.set_policy(category, frequency, count)?;
            match frequency {
                Frequency::Irregular => println!(
                    "Set {} to {} ({} times/year)",
                    category.label(),
                    frequency,
                    count
                ),
                Frequency::Regular => println!("Set {} to {}", category.label(), frequency),
            }
        }

        CategoryCommands::Estimate { category, apply } => {
            let today = Local::now().date_naive();
            let estimate = service.estimate_annual_count(category, today)?;
            println!(
                "{}: about {} occurrence(s) per year over the trailing year",
                category.label(),
                estimate
            );

            if apply {
                service.set_policy(category, Frequency::Irregular, estimate)?;
                println!("Saved as irregular policy for {}", category.label());
            }
        }
    }

    Ok(())
}
