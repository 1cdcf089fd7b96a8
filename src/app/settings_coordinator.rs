//! Viewer preference persistence.
//!
//! Preferences are stored in eframe's storage as JSON strings. Character data
//! is never persisted; only how the viewer looks.

use serde::{Deserialize, Serialize};
use crate::state::DEFAULT_DETAILS_WIDTH;
use rsaga::interaction::DEFAULT_ZOOM;

const VIEWER_SETTINGS_KEY: &str = "viewer_settings";

/// Preferences restored on startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Width of the character detail panel
    pub details_width: f32,
    /// Last zoom level
    pub zoom_level: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            details_width: DEFAULT_DETAILS_WIDTH,
            zoom_level: DEFAULT_ZOOM,
        }
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the viewer preferences, falling back to defaults for missing or
    /// unreadable entries.
    pub fn load_viewer_settings(storage: Option<&dyn eframe::Storage>) -> ViewerSettings {
        Self::load_setting_or(storage, VIEWER_SETTINGS_KEY, ViewerSettings::default())
    }

    /// Saves the viewer preferences.
    pub fn save_viewer_settings(storage: &mut dyn eframe::Storage, settings: &ViewerSettings) {
        Self::save_setting(storage, VIEWER_SETTINGS_KEY, settings);
    }

    /// Saves any serializable setting under `key`.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => storage.set_string(key, json_str),
            Err(e) => tracing::warn!(key, error = %e, "Failed to serialize setting"),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring unreadable setting");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory storage for testing
    #[derive(Default)]
    struct MockStorage {
        data: HashMap<String, String>,
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
    fn test_defaults_without_storage() {
        assert_eq!(SettingsCoordinator::load_viewer_settings(None), ViewerSettings::default());
    }

    #[test]
    fn test_viewer_settings_roundtrip() {
        let mut storage = MockStorage::default();
        let settings = ViewerSettings { details_width: 420.0, zoom_level: 1.5 };

        SettingsCoordinator::save_viewer_settings(&mut storage, &settings);

        assert_eq!(SettingsCoordinator::load_viewer_settings(Some(&storage)), settings);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let mut storage = MockStorage::default();
        storage.set_string_for_test(VIEWER_SETTINGS_KEY, r#"{"zoom_level": 0.7}"#);

        let loaded = SettingsCoordinator::load_viewer_settings(Some(&storage));
        assert_eq!(loaded.zoom_level, 0.7);
        assert_eq!(loaded.details_width, DEFAULT_DETAILS_WIDTH);
    }

    #[test]
    fn test_corrupt_settings_ignored() {
        let mut storage = MockStorage::default();
        storage.set_string_for_test(VIEWER_SETTINGS_KEY, "not json");

        let result: Option<ViewerSettings> = SettingsCoordinator::try_load_setting(Some(&storage), VIEWER_SETTINGS_KEY);
        assert_eq!(result, None);
        assert_eq!(SettingsCoordinator::load_viewer_settings(Some(&storage)), ViewerSettings::default());
    }

    impl MockStorage {
        fn set_string_for_test(&mut self, key: &str, value: &str) {
            self.data.insert(key.to_string(), value.to_string());
        }
    }
}
