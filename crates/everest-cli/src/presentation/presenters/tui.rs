use everest_core::{Page, PageRegistry, ReportContent, TabController};

use super::report::tab_entries;
use crate::presentation::view_models::{
    FooterViewModel, HighlightEntry, KeyHint, LandingLink, LandingViewModel, MenuEntry,
    NavBarViewModel, NavItem, ReportPageViewModel, StatusBarViewModel,
};

/// Which key help the status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSet {
    Landing,
    Page,
    Search,
    Menu,
}

pub fn present_nav_bar(registry: &PageRegistry, current: usize, is_dark: bool) -> NavBarViewModel {
    let items = registry
        .pages()
        .iter()
        .filter(|page| page.index > 0)
        .map(|page| NavItem {
            index: page.index,
            name: page.name.to_string(),
            active: page.index == current,
        })
        .collect();

    NavBarViewModel { items, is_dark }
}

pub fn present_status_bar(
    registry: &PageRegistry,
    current: usize,
    message: Option<&str>,
    hints: HintSet,
) -> StatusBarViewModel {
    let hints = match hints {
        HintSet::Landing => vec![
            KeyHint::new("Tab", "focus"),
            KeyHint::new("Enter", "open"),
            KeyHint::new("↓", "next page"),
            KeyHint::new("^K", "search"),
            KeyHint::new("t", "theme"),
            KeyHint::new("q", "quit"),
        ],
        HintSet::Page => vec![
            KeyHint::new("←/→", "tab"),
            KeyHint::new("↑/↓", "page"),
            KeyHint::new("j/k", "scroll"),
            KeyHint::new("^K", "search"),
            KeyHint::new("m", "menu"),
            KeyHint::new("t", "theme"),
            KeyHint::new("q", "quit"),
        ],
        HintSet::Search => vec![
            KeyHint::new("↑/↓", "select"),
            KeyHint::new("Enter", "go"),
            KeyHint::new("Esc", "close"),
        ],
        HintSet::Menu => vec![
            KeyHint::new("↑/↓", "select"),
            KeyHint::new("Enter", "go"),
            KeyHint::new("Esc", "close"),
        ],
    };

    StatusBarViewModel {
        page_number: current + 1,
        page_count: registry.len(),
        message: message.map(str::to_string),
        hints,
    }
}

pub fn present_report_page(
    page: &Page,
    content: &ReportContent,
    tabs: &TabController,
) -> ReportPageViewModel {
    let page_content = content.page(page.index);

    ReportPageViewModel {
        title: page_content
            .map(|p| p.title.clone())
            .unwrap_or_else(|| page.name.to_string()),
        subtitle: page_content.map(|p| p.subtitle.clone()).unwrap_or_default(),
        tabs: tab_entries(page),
        active_tab: tabs.active_index(),
        body: content
            .tab_body(page.index, tabs.active_tab())
            .unwrap_or_default()
            .to_string(),
        footer: FooterViewModel {
            previous: tabs.has_previous().then(|| tabs.previous_label().to_string()),
            next: tabs.has_next().then(|| tabs.next_label().to_string()),
        },
    }
}

/// One link per report page, followed by a link per tab of that page.
pub fn landing_links(registry: &PageRegistry) -> Vec<LandingLink> {
    let mut links = Vec::new();
    for page in registry.pages().iter().filter(|page| page.index > 0) {
        links.push(LandingLink {
            label: page.name.to_string(),
            page_index: page.index,
            tab: None,
        });
        for tab in page.tabs {
            links.push(LandingLink {
                label: tab.label.to_string(),
                page_index: page.index,
                tab: Some(tab.value.to_string()),
            });
        }
    }
    links
}

pub fn present_landing(registry: &PageRegistry, content: &ReportContent) -> LandingViewModel {
    let page_content = content.page(0);

    LandingViewModel {
        title: page_content
            .map(|p| p.title.clone())
            .unwrap_or_else(|| registry.name_of(0).to_string()),
        subtitle: page_content.map(|p| p.subtitle.clone()).unwrap_or_default(),
        summary: page_content.map(|p| p.summary.clone()).unwrap_or_default(),
        highlights: content
            .highlights
            .iter()
            .map(|h| HighlightEntry {
                label: h.label.clone(),
                value: h.value.clone(),
            })
            .collect(),
        links: landing_links(registry),
    }
}

/// Every (page, tab) pair of the report pages.
pub fn present_menu(registry: &PageRegistry, current: usize, active_tab: Option<&str>) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    for page in registry.pages().iter().filter(|page| page.index > 0) {
        entries.push(MenuEntry {
            label: page.name.to_string(),
            page_index: page.index,
            tab: None,
            current: page.index == current && active_tab.is_none(),
        });
        for tab in page.tabs {
            entries.push(MenuEntry {
                label: format!("  {}", tab.label),
                page_index: page.index,
                tab: Some(tab.value.to_string()),
                current: page.index == current && active_tab == Some(tab.value),
            });
        }
    }
    entries
}
