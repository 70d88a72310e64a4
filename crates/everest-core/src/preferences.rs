use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Durable string key/value slots that survive restarts.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Flat TOML table on disk, re-read on every access.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/preferences.toml`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing, unreadable or malformed files all read as an empty table.
    fn load(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match toml::from_str(&raw) {
            Ok(table) => table,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "ignoring unparsable preferences");
                BTreeMap::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = self.load();
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&table)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
