//! Storage layer for kakeibo-cli
//!
//! Two logical keys persisted as JSON files with atomic writes: the full
//! expense collection and the user settings singleton. Every mutation is a
//! whole-collection (or whole-object) replacement; there is no per-record
//! write path and no cross-process interleaving protection.

pub mod expenses;
pub mod file_io;
pub mod settings;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use settings::SettingsRepository;

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: KakeiboPaths,
    pub expenses: ExpenseRepository,
    pub settings: SettingsRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KakeiboPaths) -> Result<Self, KakeiboError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), KakeiboError> {
        self.expenses.load()?;
        self.settings.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), KakeiboError> {
        self.expenses.save()?;
        self.settings.save()?;
        Ok(())
    }

    /// Delete both stored keys; the next read falls back to defaults
    pub fn reset(&self) -> Result<(), KakeiboError> {
        self.expenses.purge()?;
        self.settings.purge()?;
        Ok(())
    }
}
