//! User settings service
//!
//! Age validation lives here, at the input boundary; the calculation layer
//! assumes a validated age and never re-checks.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::UserSettings;
use crate::storage::Storage;

/// Lowest accepted age
const MIN_AGE: u32 = 1;
/// Highest accepted age
const MAX_AGE: u32 = 120;

/// Service for user settings management
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get the current settings (default-filled)
    pub fn get(&self) -> KakeiboResult<UserSettings> {
        self.storage.settings.get()
    }

    /// Set the user's age and persist the settings object
    pub fn set_age(&self, age: u32) -> KakeiboResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(KakeiboError::Validation(format!(
                "Age must be between {} and {} (got {})",
                MIN_AGE, MAX_AGE, age
            )));
        }

        let mut settings = self.storage.settings.get()?;
        settings.age = age;
        self.storage.settings.set(settings)?;
        self.storage.settings.save()?;
        Ok(())
    }

    /// Delete all stored data; the next read falls back to defaults
    pub fn reset(&self) -> KakeiboResult<()> {
        self.storage.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::KakeiboPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_age_persists() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        service.set_age(45).unwrap();
        assert_eq!(service.get().unwrap().age, 45);
        assert!(storage.paths().settings_file().exists());
    }

    #[test]
    fn test_set_age_bounds() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        assert!(service.set_age(0).unwrap_err().is_validation());
        assert!(service.set_age(121).unwrap_err().is_validation());
        assert!(service.set_age(1).is_ok());
        assert!(service.set_age(120).is_ok());
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let service = SettingsService::new(&storage);

        service.set_age(45).unwrap();
        service.reset().unwrap();

        assert_eq!(service.get().unwrap().age, 30);
        assert!(!storage.paths().settings_file().exists());
    }
}
