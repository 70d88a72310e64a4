//! Per-frame snapshots for the interactive viewer.
//!
//! These carry WHAT to draw. Scroll offsets, focus and selection live in the
//! components that own them.

use serde::Serialize;

use super::report::{HighlightEntry, TabEntry};

#[derive(Debug, Clone, Serialize)]
pub struct NavBarViewModel {
    pub items: Vec<NavItem>,
    pub is_dark: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub index: usize,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub page_number: usize,
    pub page_count: usize,
    pub message: Option<String>,
    pub hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPageViewModel {
    pub title: String,
    pub subtitle: String,
    pub tabs: Vec<TabEntry>,
    pub active_tab: usize,
    pub body: String,
    pub footer: FooterViewModel,
}

/// Labels for the page footer controls. `None` means the control is disabled.
#[derive(Debug, Clone, Serialize)]
pub struct FooterViewModel {
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingViewModel {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub highlights: Vec<HighlightEntry>,
    pub links: Vec<LandingLink>,
}

/// Deep link offered on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingLink {
    pub label: String,
    pub page_index: usize,
    pub tab: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: String,
    pub page_index: usize,
    pub tab: Option<String>,
    pub current: bool,
}
