//! Persisted UI preferences.
//!
//! Preferences are string key/value pairs. The theme is stored under
//! [`DARK_MODE_KEY`] as `"true"` or `"false"`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DARK_MODE_KEY: &str = "dark-mode";

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to read preferences: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write preferences: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine a configuration directory for preferences")]
    NoConfigDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    pub fn toggle(self) -> Self {
        Self::from_dark_mode(!self.is_dark())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parse the stored flag; anything but `"true"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::from_dark_mode(value == Some("true"))
    }

    pub fn stored_value(&self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key/value store for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

    fn theme(&self) -> Result<ThemePreference, PreferenceError> {
        let value = self.get(DARK_MODE_KEY)?;
        Ok(ThemePreference::from_stored(value.as_deref()))
    }

    fn set_theme(&self, theme: ThemePreference) -> Result<(), PreferenceError> {
        self.set(DARK_MODE_KEY, theme.stored_value())
    }

    /// Flip the stored theme and return the new one.
    fn toggle_theme(&self) -> Result<ThemePreference, PreferenceError> {
        let next = self.theme()?.toggle();
        self.set_theme(next)?;
        Ok(next)
    }
}

/// In-process store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/deceptiscan/preferences.json`.
    pub fn open_default() -> Result<Self, PreferenceError> {
        Self::default_path()
            .map(Self::new)
            .ok_or(PreferenceError::NoConfigDir)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deceptiscan").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| PreferenceError::ReadError {
            path: self.path.display().to_string(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| PreferenceError::ParseError {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let write_error = |e| PreferenceError::WriteError {
            path: self.path.display().to_string(),
            source: e,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| {
            PreferenceError::ParseError {
                path: self.path.display().to_string(),
                source: e,
            }
        })?;
        fs::write(&self.path, content).map_err(write_error)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        debug!(path = %self.path.display(), key, value, "Saved preference");
        Ok(())
    }
}
