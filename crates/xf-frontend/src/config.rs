//! Application configuration
//!
//! Holds the inspector display modes and the store they persist to.
//! Loaded once at startup and shared by every inspector panel.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use xf_core::{DisplaySettings, MemoryPreferenceStore, PreferenceStore, RonPreferenceStore};

/// Shared configuration handle
pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Preference file name inside the config directory
const PREFERENCES_FILE: &str = "inspector.ron";

/// Display settings plus their backing store
pub struct ConfigManager {
    settings: DisplaySettings,
    store: Box<dyn PreferenceStore + Send + Sync>,
}

impl ConfigManager {
    /// Load from the platform config directory, falling back to an
    /// in-memory store if the file cannot be read
    pub fn load() -> Self {
        let path = default_preferences_path();
        match RonPreferenceStore::open(&path) {
            Ok(store) => {
                tracing::info!("Loaded preferences from {}", path.display());
                Self::with_store(Box::new(store))
            }
            Err(e) => {
                tracing::warn!("Failed to load preferences from {}: {}", path.display(), e);
                Self::with_store(Box::new(MemoryPreferenceStore::new()))
            }
        }
    }

    pub fn with_store(store: Box<dyn PreferenceStore + Send + Sync>) -> Self {
        let settings = DisplaySettings::load(store.as_ref());
        Self { settings, store }
    }

    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    pub fn toggle_quaternion_mode(&mut self) {
        if let Err(e) = self.settings.toggle_quaternion_mode(self.store.as_mut()) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    }

    pub fn toggle_uniform_scale(&mut self) {
        if let Err(e) = self.settings.toggle_uniform_scale(self.store.as_mut()) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    }
}

/// `<config dir>/xf/inspector.ron`, or the working directory if the
/// platform has no config directory
pub fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("xf")
        .join(PREFERENCES_FILE)
}

/// Load the configuration and wrap it for sharing
pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::load()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_persist_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);

        let mut config =
            ConfigManager::with_store(Box::new(RonPreferenceStore::open(&path).unwrap()));
        assert_eq!(config.settings(), DisplaySettings::default());
        config.toggle_quaternion_mode();
        config.toggle_uniform_scale();
        config.toggle_uniform_scale();

        let reloaded =
            ConfigManager::with_store(Box::new(RonPreferenceStore::open(&path).unwrap()));
        assert!(reloaded.settings().quaternion_mode);
        assert!(!reloaded.settings().uniform_scale);
    }

    #[test]
    fn test_memory_store_fallback() {
        let mut config = ConfigManager::with_store(Box::new(MemoryPreferenceStore::new()));
        config.toggle_uniform_scale();
        assert!(config.settings().uniform_scale);
    }
}
