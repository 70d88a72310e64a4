//! Static page table and alias resolution.
//!
//! The registry is fixed at build time: six pages with contiguous, zero-based
//! indices, their ordered tab lists, and a many-to-one alias table used by
//! deep links (`"data"` and `"methods"` both route to Data & Methods).

use crate::navigation::NavigationTarget;
use crate::tabs::TabController;

/// One tab of a page's tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub value: &'static str,
    pub label: &'static str,
}

/// A compile-time navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page_index: usize,
    pub tab: Option<&'static str>,
}

impl From<PageLink> for NavigationTarget {
    fn from(link: PageLink) -> Self {
        NavigationTarget {
            page_index: link.page_index,
            tab: link.tab.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Cover page with deep links into every section
    Landing,
    /// Tabbed report page
    Report,
}

#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub index: usize,
    pub name: &'static str,
    pub kind: PageKind,
    pub tabs: &'static [TabSpec],
    pub default_tab: Option<&'static str>,
    /// Fired by "previous" while the first tab is active
    pub previous_link: Option<PageLink>,
    /// Fired by "next" while the last tab is active
    pub next_link: Option<PageLink>,
}

impl Page {
    pub fn has_tab(&self, value: &str) -> bool {
        self.tabs.iter().any(|t| t.value == value)
    }

    pub fn tab_label(&self, value: &str) -> Option<&'static str> {
        self.tabs.iter().find(|t| t.value == value).map(|t| t.label)
    }

    /// Build a fresh tab controller for one mount of this page.
    ///
    /// The inbound tab seeds the active tab when it names one of this page's
    /// tabs; otherwise the default tab is used. Landing has no tabs and
    /// returns `None`.
    pub fn mount_tabs(&self, registry: &PageRegistry, inbound: Option<&str>) -> Option<TabController> {
        let first = self.tabs.first()?;
        let default_tab = self.default_tab.unwrap_or(first.value);

        let controller = match TabController::new(self.tabs.iter().map(|t| t.value), default_tab) {
            Ok(controller) => controller,
            Err(err) => {
                tracing::warn!(page = self.index, %err, "invalid tab table");
                return None;
            }
        };

        let controller = match self.previous_link {
            Some(link) => controller.with_previous_override(link.into(), registry.name_of(link.page_index)),
            None => controller,
        };
        let controller = match self.next_link {
            Some(link) => controller.with_next_override(link.into(), registry.name_of(link.page_index)),
            None => controller,
        };

        Some(controller.seeded(inbound))
    }
}

const INTRODUCTION_TABS: &[TabSpec] = &[
    TabSpec { value: "abstract", label: "Abstract" },
    TabSpec { value: "context", label: "Background" },
    TabSpec { value: "literature", label: "Literature Review" },
    TabSpec { value: "question", label: "Research Question" },
];

const VARIABLES_TABS: &[TabSpec] = &[
    TabSpec { value: "data", label: "Data" },
    TabSpec { value: "nationality", label: "Nationality" },
    TabSpec { value: "year-season", label: "Year & Season" },
    TabSpec { value: "route", label: "Route" },
    TabSpec { value: "crowding", label: "Crowding" },
    TabSpec { value: "sherpa-ratio", label: "Sherpa Ratio" },
    TabSpec { value: "team-size", label: "Team Size" },
    TabSpec { value: "limitations", label: "Limitations" },
];

const DATA_METHODS_TABS: &[TabSpec] = &[
    TabSpec { value: "sources", label: "Data Sources" },
    TabSpec { value: "processing", label: "Data Processing" },
    TabSpec { value: "dataset", label: "Final Dataset" },
    TabSpec { value: "methods", label: "Methods" },
    TabSpec { value: "limitations", label: "Limitations" },
];

const ANALYSIS_TABS: &[TabSpec] = &[
    TabSpec { value: "regression", label: "Regression Results" },
    TabSpec { value: "visualizations", label: "Visualisations" },
    TabSpec { value: "patterns", label: "Key Patterns" },
];

const DISCUSSION_TABS: &[TabSpec] = &[
    TabSpec { value: "findings", label: "Key Findings" },
    TabSpec { value: "limitations", label: "Limitations" },
    TabSpec { value: "criteria", label: "Assessment Criteria" },
    TabSpec { value: "team", label: "Team" },
    TabSpec { value: "references", label: "References" },
];

const PAGES: [Page; 6] = [
    Page {
        index: 0,
        name: "Landing",
        kind: PageKind::Landing,
        tabs: &[],
        default_tab: None,
        previous_link: None,
        next_link: None,
    },
    Page {
        index: 1,
        name: "Introduction",
        kind: PageKind::Report,
        tabs: INTRODUCTION_TABS,
        default_tab: Some("abstract"),
        previous_link: Some(PageLink { page_index: 0, tab: None }),
        next_link: Some(PageLink { page_index: 2, tab: None }),
    },
    Page {
        index: 2,
        name: "Variables",
        kind: PageKind::Report,
        tabs: VARIABLES_TABS,
        default_tab: Some("data"),
        previous_link: Some(PageLink { page_index: 1, tab: None }),
        next_link: Some(PageLink { page_index: 3, tab: None }),
    },
    Page {
        index: 3,
        name: "Data & Methods",
        kind: PageKind::Report,
        tabs: DATA_METHODS_TABS,
        default_tab: Some("sources"),
        previous_link: Some(PageLink { page_index: 2, tab: Some("limitations") }),
        next_link: None,
    },
    Page {
        index: 4,
        name: "Analysis",
        kind: PageKind::Report,
        tabs: ANALYSIS_TABS,
        default_tab: Some("regression"),
        previous_link: None,
        next_link: None,
    },
    Page {
        index: 5,
        name: "Discussion",
        kind: PageKind::Report,
        tabs: DISCUSSION_TABS,
        default_tab: Some("findings"),
        previous_link: None,
        next_link: None,
    },
];

const ALIASES: [(&str, usize); 13] = [
    ("landing", 0),
    ("home", 1),
    ("introduction", 1),
    ("context", 1),
    ("variables", 2),
    ("data", 3),
    ("methods", 3),
    ("analysis", 4),
    ("results", 4),
    ("findings", 4),
    ("discussion", 5),
    ("team", 5),
    ("conclusion", 5),
];

/// Bidirectional mapping between page indices, display names and aliases.
#[derive(Debug, Clone, Copy)]
pub struct PageRegistry {
    pages: &'static [Page],
    aliases: &'static [(&'static str, usize)],
}

impl PageRegistry {
    pub const fn new(pages: &'static [Page], aliases: &'static [(&'static str, usize)]) -> Self {
        Self { pages, aliases }
    }

    /// The report's six pages and their aliases.
    pub const fn everest() -> Self {
        Self::new(&PAGES, &ALIASES)
    }

    /// Case-insensitive exact alias lookup. No partial matching.
    pub fn resolve(&self, alias: &str) -> Option<usize> {
        let key = alias.to_lowercase();
        self.aliases
            .iter()
            .find(|(name, _)| name.to_lowercase() == key)
            .map(|(_, index)| *index)
    }

    pub fn page(&self, index: usize) -> Option<&'static Page> {
        self.pages.get(index)
    }

    pub fn pages(&self) -> &'static [Page] {
        self.pages
    }

    pub fn aliases(&self) -> &'static [(&'static str, usize)] {
        self.aliases
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.pages.len()
    }

    pub fn aliases_for(&self, index: usize) -> Vec<&'static str> {
        self.aliases
            .iter()
            .filter(|(_, i)| *i == index)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn name_of(&self, index: usize) -> &'static str {
        self.page(index).map(|p| p.name).unwrap_or("")
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::everest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mixed_case(s: &str) -> String {
        s.chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    #[test]
    fn test_indices_are_contiguous_and_zero_based() {
        let registry = PageRegistry::everest();
        assert_eq!(registry.len(), 6);
        for (position, page) in registry.pages().iter().enumerate() {
            assert_eq!(page.index, position);
        }
    }

    #[test]
    fn test_every_alias_resolves_in_any_case() {
        let registry = PageRegistry::everest();
        for (alias, index) in registry.aliases() {
            assert_eq!(registry.resolve(alias), Some(*index));
            assert_eq!(registry.resolve(&alias.to_uppercase()), Some(*index));
            assert_eq!(registry.resolve(&alias.to_lowercase()), Some(*index));
            assert_eq!(registry.resolve(&mixed_case(alias)), Some(*index));
        }
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let registry = PageRegistry::everest();
        assert_eq!(registry.resolve("analysis"), Some(4));
        assert_eq!(registry.resolve("analys"), None);
        assert_eq!(registry.resolve(" analysis"), None);
        assert_eq!(registry.resolve(""), None);
        assert_eq!(registry.resolve("not-a-real-alias"), None);
    }

    #[test]
    fn test_many_aliases_map_to_one_page() {
        let registry = PageRegistry::everest();
        assert_eq!(registry.resolve("data"), registry.resolve("methods"));
        assert_eq!(registry.aliases_for(5), vec!["discussion", "team", "conclusion"]);
    }

    #[test]
    fn test_tab_tables_are_unique_and_defaults_are_members() {
        for page in PageRegistry::everest().pages() {
            let unique: HashSet<_> = page.tabs.iter().map(|t| t.value).collect();
            assert_eq!(unique.len(), page.tabs.len(), "duplicate tab on {}", page.name);
            if let Some(default_tab) = page.default_tab {
                assert!(page.has_tab(default_tab), "default not a member on {}", page.name);
            }
        }
    }

    #[test]
    fn test_mount_tabs_seeds_from_inbound_tab() {
        let registry = PageRegistry::everest();
        let analysis = registry.page(4).unwrap();

        let controller = analysis.mount_tabs(&registry, Some("patterns")).unwrap();
        assert_eq!(controller.active_tab(), "patterns");

        let controller = analysis.mount_tabs(&registry, Some("nonsense")).unwrap();
        assert_eq!(controller.active_tab(), "regression");

        let controller = analysis.mount_tabs(&registry, None).unwrap();
        assert_eq!(controller.active_tab(), "regression");
    }

    #[test]
    fn test_landing_has_no_tab_controller() {
        let registry = PageRegistry::everest();
        assert!(registry.page(0).unwrap().mount_tabs(&registry, None).is_none());
    }

    #[test]
    fn test_boundary_links_target_registered_pages() {
        let registry = PageRegistry::everest();
        for page in registry.pages() {
            for link in [page.previous_link, page.next_link].into_iter().flatten() {
                let target = registry.page(link.page_index).expect("link target exists");
                if let Some(tab) = link.tab {
                    assert!(target.has_tab(tab));
                }
            }
        }
    }
}
