//! User settings repository
//!
//! The settings object is a singleton: reads default-fill when the file is
//! absent or partial, and every write replaces the whole object.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::KakeiboError;
use crate::models::UserSettings;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the user settings singleton
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(UserSettings::default()),
        }
    }

    /// Load settings from disk, default-filling missing file or fields
    pub fn load(&self) -> Result<(), KakeiboError> {
        let settings: UserSettings = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = settings;
        Ok(())
    }

    /// Get a copy of the current settings
    pub fn get(&self) -> Result<UserSettings, KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the settings object in memory
    pub fn set(&self, settings: UserSettings) -> Result<(), KakeiboError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = settings;
        Ok(())
    }

    /// Save the complete settings object to disk
    pub fn save(&self) -> Result<(), KakeiboError> {
        let data = self
            .data
            .read()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Delete the backing file and restore defaults (reset)
    pub fn purge(&self) -> Result<(), KakeiboError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| KakeiboError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = UserSettings::default();

        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                KakeiboError::Storage(format!(
                    "Failed to remove {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }
}
