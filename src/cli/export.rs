//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{KakeiboError, KakeiboResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export expenses as CSV, including normalized figures
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the complete data set as JSON
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Compact instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Export the complete data set as YAML
    Yaml {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> KakeiboResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            write_export(output, |mut writer| export_expenses_csv(storage, &mut writer))
        }
        ExportCommands::Json { output, compact } => {
            write_export(output, |mut writer| {
                export_full_json(storage, &mut writer, !compact)
            })
        }
        ExportCommands::Yaml { output } => {
            write_export(output, |mut writer| export_full_yaml(storage, &mut writer))
        }
    }
}

/// Run an export against a file or stdout
fn write_export<F>(output: Option<PathBuf>, export: F) -> KakeiboResult<()>
where
    F: FnOnce(&mut dyn Write) -> KakeiboResult<()>,
{
    match output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                KakeiboError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            export(&mut file)?;
            println!("Exported to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export(&mut handle)?;
        }
    }

    Ok(())
}
