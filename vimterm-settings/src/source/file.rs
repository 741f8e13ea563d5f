//! YAML-file–backed preference store.
//!
//! The file is a flat mapping of preference key to scalar:
//!
//! ```yaml
//! fontsize: "14"
//! color: "3"
//! verify_path: false
//! last_version: 31
//! ```

use super::{MemoryPreferences, PrefValue, PreferenceSource};
use crate::error::{Result, SettingsError};
use std::fs;
use std::path::{Path, PathBuf};

/// Preferences persisted in a YAML file.
#[derive(Debug, Clone)]
pub struct PreferenceFile {
    path: PathBuf,
    values: MemoryPreferences,
}

impl PreferenceFile {
    /// Open the preference file at `path`.
    ///
    /// A missing file yields an empty store that will be created on [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = read_values(&path)?;
        Ok(Self { path, values })
    }

    /// Open the preference file at the default location, falling back to an
    /// empty store when it cannot be read.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        log::info!("Preference file path: {:?}", path);
        match Self::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Ignoring unreadable preference file: {}", e);
                Self {
                    path,
                    values: MemoryPreferences::new(),
                }
            }
        }
    }

    /// Re-read the file from disk, replacing the in-memory values.
    ///
    /// On error the current values are kept.
    pub fn reload(&mut self) -> Result<()> {
        self.values = read_values(&self.path)?;
        log::debug!(
            "Reloaded {} preferences from {:?}",
            self.values.len(),
            self.path
        );
        Ok(())
    }

    /// Write the preferences back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        let yaml = serde_yaml_ng::to_string(&self.values)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(|e| SettingsError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| SettingsError::io(&self.path, e))?;

        log::info!("Saved {} preferences to {:?}", self.values.len(), self.path);
        Ok(())
    }

    /// Default preference file path (XDG convention on every platform but Windows).
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("preferences.yaml")
    }

    /// Directory holding the default preference file.
    pub fn default_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("vimterm")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("vimterm")
            } else {
                PathBuf::from(".")
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn values(&self) -> &MemoryPreferences {
        &self.values
    }

    /// Mutable access for editing before [`save`](Self::save).
    pub fn values_mut(&mut self) -> &mut MemoryPreferences {
        &mut self.values
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PrefValue>) {
        self.values.set(key, value);
    }
}

impl PreferenceSource for PreferenceFile {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values.get_string(key, default)
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get_bool(key, default)
    }

    fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.values.get_i64(key, default)
    }
}

fn read_values(path: &Path) -> Result<MemoryPreferences> {
    if !path.exists() {
        log::debug!("Preference file {:?} does not exist yet", path);
        return Ok(MemoryPreferences::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
    if contents.trim().is_empty() {
        return Ok(MemoryPreferences::new());
    }

    serde_yaml_ng::from_str(&contents).map_err(|e| SettingsError::parse(path, e))
}
