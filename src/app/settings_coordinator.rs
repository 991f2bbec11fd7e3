//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting demo preferences (currently
//! the overlay hide delay) to eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
///
/// Type-safe loading and saving of any serializable setting to eframe's
/// persistent storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if the key is missing or invalid
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_hide_delay() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "hide_delay_ms", &450u64);

        let loaded: u64 = SettingsCoordinator::load_setting_or(Some(&storage), "hide_delay_ms", 300);
        assert_eq!(loaded, 450);
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let storage = MockStorage::new();
        let loaded: u64 = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 300);
        assert_eq!(loaded, 300);
    }

    #[test]
    fn test_invalid_json_falls_back_to_default() {
        let mut storage = MockStorage::new();
        storage.set_string("hide_delay_ms", "not json".to_string());
        let loaded: u64 = SettingsCoordinator::load_setting_or(Some(&storage), "hide_delay_ms", 300);
        assert_eq!(loaded, 300);
    }
}
