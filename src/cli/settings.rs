//! User settings CLI commands

use clap::Subcommand;

use crate::error::KakeiboResult;
use crate::services::SettingsService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the user's age (1-120), used to amortize lifetime expenses
    SetAge {
        /// Age in years
        age: u32,
    },
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> KakeiboResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            let settings = service.get()?;
            println!("Age: {}", settings.age);
            println!(
                "Category overrides: {} (see 'kakeibo category list')",
                settings.category_settings.len()
            );
        }

        SettingsCommands::SetAge { age } => {
            service.set_age(age)?;
            println!("Age set to {}", age);
        }
    }

    Ok(())
}
