use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preferences::PreferenceStore;

/// Preference slot holding the theme.
pub const THEME_SLOT: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact value `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide dark/light flag backed by a durable slot.
///
/// `toggle` is the only writer.
#[derive(Debug)]
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the slot once. Missing or unrecognized values mean light.
    pub fn init(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_SLOT).as_deref());
        tracing::debug!(%theme, "theme initialized");
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flip the flag, then persist it.
    ///
    /// The in-memory flag flips even when the write fails.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.theme = self.theme.flipped();
        self.store.set(THEME_SLOT, self.theme.as_str())?;
        Ok(self.theme)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FilePreferenceStore, MemoryPreferenceStore};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_light() {
        let state = ThemeState::init(MemoryPreferenceStore::new());
        assert!(!state.is_dark());
    }

    #[test]
    fn test_unrecognized_value_is_light() {
        for raw in ["Dark", "true", "", "midnight"] {
            let state = ThemeState::init(MemoryPreferenceStore::new().with(THEME_SLOT, raw));
            assert_eq!(state.theme(), Theme::Light, "value {:?}", raw);
        }
    }

    #[test]
    fn test_toggle_survives_reinitialization() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let mut state = ThemeState::init(FilePreferenceStore::in_dir(temp_dir.path()));
        let before = state.is_dark();
        state.toggle()?;

        let reloaded = ThemeState::init(FilePreferenceStore::in_dir(temp_dir.path()));
        assert_eq!(reloaded.is_dark(), !before);
        Ok(())
    }

    #[test]
    fn test_double_toggle_restores_original() -> anyhow::Result<()> {
        let mut state = ThemeState::init(MemoryPreferenceStore::new().with(THEME_SLOT, "dark"));
        state.toggle()?;
        state.toggle()?;
        assert!(state.is_dark());

        let store = state.into_store();
        assert_eq!(store.get(THEME_SLOT).as_deref(), Some("dark"));
        Ok(())
    }
}
