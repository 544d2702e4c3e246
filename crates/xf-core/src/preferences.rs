//! Display-mode preferences and their persistence

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::constants::{QUATERNION_MODE_KEY, UNIFORM_SCALE_KEY};
use crate::error::{InspectorResult, PreferenceError};

/// String-keyed boolean preference storage
pub trait PreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Store a value; persistent stores write through immediately
    fn set_bool(&mut self, key: &str, value: bool) -> InspectorResult<()>;
}

/// Non-persistent store, used for tests and as a fallback
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) -> InspectorResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Preference store backed by a RON file
#[derive(Debug, Clone)]
pub struct RonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl RonPreferenceStore {
    /// Open the store at `path`; a missing file yields an empty store
    pub fn open(path: impl AsRef<Path>) -> InspectorResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content =
                std::fs::read_to_string(&path).map_err(|e| PreferenceError::Io(e.to_string()))?;
            ron::from_str(&content).map_err(|e| PreferenceError::Deserialize(e.to_string()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> InspectorResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| PreferenceError::Io(e.to_string()))?;
        }
        let content = ron::ser::to_string_pretty(&self.values, ron::ser::PrettyConfig::default())
            .map_err(|e| PreferenceError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| PreferenceError::Io(e.to_string()))?;
        Ok(())
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) -> InspectorResult<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

/// The two process-wide display modes of the transform inspector
///
/// Loaded once at startup and shared by every inspector; toggles write
/// through to the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Show rotation as raw quaternion components instead of Euler angles
    pub quaternion_mode: bool,
    /// Edit scale through a single value applied to all axes
    pub uniform_scale: bool,
}

impl DisplaySettings {
    /// Read both modes from the store, defaulting to off
    pub fn load(store: &dyn PreferenceStore) -> Self {
        Self {
            quaternion_mode: store.get_bool(QUATERNION_MODE_KEY).unwrap_or(false),
            uniform_scale: store.get_bool(UNIFORM_SCALE_KEY).unwrap_or(false),
        }
    }

    /// Flip quaternion mode and persist it
    ///
    /// The in-memory value changes even if the store write fails.
    pub fn toggle_quaternion_mode(&mut self, store: &mut dyn PreferenceStore) -> InspectorResult<()> {
        self.quaternion_mode = !self.quaternion_mode;
        tracing::info!("Quaternion rotation display: {}", self.quaternion_mode);
        store.set_bool(QUATERNION_MODE_KEY, self.quaternion_mode)
    }

    /// Flip uniform scale mode and persist it
    ///
    /// The in-memory value changes even if the store write fails.
    pub fn toggle_uniform_scale(&mut self, store: &mut dyn PreferenceStore) -> InspectorResult<()> {
        self.uniform_scale = !self.uniform_scale;
        tracing::info!("Uniform scale editing: {}", self.uniform_scale);
        store.set_bool(UNIFORM_SCALE_KEY, self.uniform_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_off() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(DisplaySettings::load(&store), DisplaySettings::default());
    }

    #[test]
    fn test_toggle_writes_through() {
        let mut store = MemoryPreferenceStore::new();
        let mut settings = DisplaySettings::load(&store);

        settings.toggle_quaternion_mode(&mut store).unwrap();
        assert!(settings.quaternion_mode);
        assert_eq!(store.get_bool(QUATERNION_MODE_KEY), Some(true));
        assert_eq!(store.get_bool(UNIFORM_SCALE_KEY), None);

        settings.toggle_uniform_scale(&mut store).unwrap();
        settings.toggle_quaternion_mode(&mut store).unwrap();
        assert_eq!(
            DisplaySettings::load(&store),
            DisplaySettings {
                quaternion_mode: false,
                uniform_scale: true,
            }
        );
    }

    #[test]
    fn test_ron_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("inspector.ron");

        {
            let mut store = RonPreferenceStore::open(&path).unwrap();
            let mut settings = DisplaySettings::load(&store);
            settings.toggle_uniform_scale(&mut store).unwrap();
        }

        let store = RonPreferenceStore::open(&path).unwrap();
        let settings = DisplaySettings::load(&store);
        assert!(settings.uniform_scale);
        assert!(!settings.quaternion_mode);
    }

    #[test]
    fn test_ron_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inspector.ron");
        std::fs::write(&path, "not ron {").unwrap();

        let result = RonPreferenceStore::open(&path);
        assert!(matches!(
            result,
            Err(crate::InspectorError::Preferences(PreferenceError::Deserialize(_)))
        ));
    }
}
