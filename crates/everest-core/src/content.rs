//! Report text: titles, summaries and one body per tab.
//!
//! The default text is compiled in from `content/report.toml`. An alternate
//! file can replace it wholesale, provided it covers every registered tab.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::PageRegistry;

const EMBEDDED_REPORT: &str = include_str!("../content/report.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub index: usize,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tabs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportContent {
    #[serde(default, rename = "highlight")]
    pub highlights: Vec<Highlight>,
    #[serde(default, rename = "page")]
    pub pages: Vec<PageContent>,
}

impl ReportContent {
    /// The compiled-in report.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_REPORT)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ContentNotFound(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse without validating against a registry.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from `path` if given, else the embedded report, then validate.
    pub fn load(path: Option<&Path>, registry: &PageRegistry) -> Result<Self> {
        let content = match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading report content");
                Self::from_path(path)?
            }
            None => Self::embedded()?,
        };
        content.validate(registry)?;
        Ok(content)
    }

    /// Every page index must be registered and every registered tab needs a
    /// body. Extra tab bodies are tolerated.
    pub fn validate(&self, registry: &PageRegistry) -> Result<()> {
        for page in &self.pages {
            if !registry.contains(page.index) {
                return Err(Error::UnknownPage(page.index));
            }
        }

        for page in registry.pages() {
            for tab in page.tabs {
                if self.tab_body(page.index, tab.value).is_none() {
                    return Err(Error::MissingContent {
                        page: page.index,
                        tab: tab.value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn page(&self, index: usize) -> Option<&PageContent> {
        self.pages.iter().find(|p| p.index == index)
    }

    pub fn tab_body(&self, index: usize, tab: &str) -> Option<&str> {
        self.page(index)
            .and_then(|p| p.tabs.get(tab))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_report_covers_every_tab() -> anyhow::Result<()> {
        let registry = PageRegistry::everest();
        let content = ReportContent::load(None, &registry)?;
        assert_eq!(content.pages.len(), registry.len());
        assert_eq!(content.highlights.len(), 4);
        Ok(())
    }

    #[test]
    fn test_embedded_report_carries_regression_figures() -> anyhow::Result<()> {
        let content = ReportContent::embedded()?;
        let regression = content.tab_body(4, "regression").unwrap_or_default();
        assert!(regression.contains("R² = 0.308"));
        assert!(regression.contains("n = 2,312"));
        assert!(regression.contains("β = 0.2454"));
        Ok(())
    }

    #[test]
    fn test_missing_tab_body_is_rejected() -> anyhow::Result<()> {
        let content = ReportContent::from_toml_str(
            r#"
[[page]]
index = 4
title = "Analysis"

[page.tabs]
regression = "only one"
"#,
        )?;
        let err = content.validate(&PageRegistry::everest()).unwrap_err();
        assert!(matches!(err, Error::MissingContent { page: 1, .. }));
        Ok(())
    }

    #[test]
    fn test_unknown_page_is_rejected() -> anyhow::Result<()> {
        let content = ReportContent::from_toml_str(
            r#"
[[page]]
index = 9
title = "Appendix"
"#,
        )?;
        let err = content.validate(&PageRegistry::everest()).unwrap_err();
        assert!(matches!(err, Error::UnknownPage(9)));
        Ok(())
    }

    #[test]
    fn test_from_path_reports_missing_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("report.toml");
        assert!(matches!(
            ReportContent::from_path(&missing),
            Err(Error::ContentNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_alternate_file_round_trips_through_load() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("report.toml");
        let embedded = ReportContent::embedded()?;
        std::fs::write(&path, toml::to_string(&embedded)?)?;

        let loaded = ReportContent::load(Some(&path), &PageRegistry::everest())?;
        assert_eq!(loaded, embedded);
        Ok(())
    }
}
