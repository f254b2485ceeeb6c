use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kakeibo::cli::{
    handle_category_command, handle_expense_command, handle_export_command, handle_report_command,
    handle_settings_command, CategoryCommands, ExpenseCommands, ExportCommands, ReportCommands,
    SettingsCommands,
};
use kakeibo::config::paths::KakeiboPaths;
use kakeibo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kakeibo",
    version,
    about = "Command-line household expense tracker",
    long_about = "kakeibo is a household expense tracker. Every expense - a one-off \
                  purchase, a monthly bill, a yearly bill or a lifetime investment - \
                  is normalized to comparable daily/monthly/yearly cost so you can \
                  see what your life actually costs per month."
)]
struct Cli {
    /// Data directory override
    #[arg(long, env = "KAKEIBO_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category policy commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// User settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Reporting commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Delete all stored data
    Reset {
        /// Skip the confirmation hint and delete immediately
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => KakeiboPaths::with_base_dir(dir),
        None => KakeiboPaths::new()?,
    };

    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&storage, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, cmd)?,
        Commands::Settings(cmd) => handle_settings_command(&storage, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, cmd)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Reset { yes } => {
            if yes {
                storage.reset()?;
                println!("All data deleted.");
            } else {
                println!(
                    "This deletes all expenses and settings. Re-run with --yes to confirm."
                );
            }
        }
        Commands::Config => {
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Expenses file:  {}", storage.paths().expenses_file().display());
            println!("Settings file:  {}", storage.paths().settings_file().display());
            println!("Expense count:  {}", storage.expenses.count()?);
        }
    }

    Ok(())
}
