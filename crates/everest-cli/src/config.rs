use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. EVEREST_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.everest
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("EVEREST_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("everest"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".everest"));
    }

    anyhow::bail!("Could not determine data directory: no HOME or platform data directory found")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval of the viewer loop
    pub tick_rate_ms: u64,
    /// Lines moved by j/k
    pub scroll_step: u16,
    /// Lines moved by PageUp/PageDown
    pub page_scroll_step: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            scroll_step: 3,
            page_scroll_step: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Viewer log file, relative to the data directory
    pub file: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: "everest.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogSettings,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn load_in(data_dir: &Path) -> Result<Self> {
        Self::load_from(&data_dir.join(CONFIG_FILE))
    }

    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.log.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.ui.scroll_step, 3);
        assert_eq!(config.ui.page_scroll_step, 10);
        assert_eq!(config.log.file, "everest.log");
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui]\nscroll_step = 5\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.ui.scroll_step, 5);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.log.file, "everest.log");
        Ok(())
    }

    #[test]
    fn test_log_file_is_relative_to_data_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[log]\nfile = \"viewer.log\"\n",
        )?;

        let config = Config::load_in(temp_dir.path())?;
        assert_eq!(config.log_path(temp_dir.path()), temp_dir.path().join("viewer.log"));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }

    #[test]
    fn test_explicit_data_dir_wins() -> Result<()> {
        let resolved = resolve_data_dir(Some("/tmp/everest-explicit"))?;
        assert_eq!(resolved, PathBuf::from("/tmp/everest-explicit"));
        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/var/data"), PathBuf::from("/var/data"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }
}
