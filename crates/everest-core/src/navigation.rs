//! Navigation state: which page is showing and which tab it should open on.
//!
//! The store is the single writer of the current page/tab pair. Every update
//! commits both fields together so a reader never observes a new page with a
//! stale tab. Requests that do not resolve are silent no-ops: deep links are
//! hand-authored constants and a typo must not take the viewer down.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::registry::PageRegistry;

/// A page reference as written by a caller: a raw index or an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageIdentifier {
    Index(usize),
    Alias(String),
}

impl From<usize> for PageIdentifier {
    fn from(index: usize) -> Self {
        PageIdentifier::Index(index)
    }
}

impl From<&str> for PageIdentifier {
    fn from(alias: &str) -> Self {
        PageIdentifier::Alias(alias.to_string())
    }
}

impl From<String> for PageIdentifier {
    fn from(alias: String) -> Self {
        PageIdentifier::Alias(alias)
    }
}

impl FromStr for PageIdentifier {
    type Err = Infallible;

    /// All-digit input becomes an index, anything else an alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(index) = trimmed.parse::<usize>() {
                return Ok(PageIdentifier::Index(index));
            }
        }
        Ok(PageIdentifier::Alias(s.to_string()))
    }
}

impl fmt::Display for PageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageIdentifier::Index(index) => write!(f, "{}", index),
            PageIdentifier::Alias(alias) => write!(f, "{}", alias),
        }
    }
}

/// Resolved destination of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationTarget {
    pub page_index: usize,
    pub tab: Option<String>,
}

impl NavigationTarget {
    pub fn page(page_index: usize) -> Self {
        Self {
            page_index,
            tab: None,
        }
    }

    pub fn with_tab(page_index: usize, tab: impl Into<String>) -> Self {
        Self {
            page_index,
            tab: Some(tab.into()),
        }
    }

    /// Render identity of the page this target mounts.
    pub fn render_key(&self) -> RenderKey {
        RenderKey {
            page_index: self.page_index,
            tab: self.tab.clone(),
        }
    }
}

/// Identity of a mounted page.
///
/// Two navigations with equal keys reuse the mounted page (and its in-page
/// tab state); a different key forces unmount and remount so the inbound tab
/// is applied again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub page_index: usize,
    pub tab: Option<String>,
}

impl fmt::Display for RenderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.page_index,
            self.tab.as_deref().unwrap_or("default")
        )
    }
}

#[derive(Debug, Clone)]
pub struct NavigationStore {
    registry: PageRegistry,
    current: NavigationTarget,
    revision: u64,
}

impl NavigationStore {
    /// A store positioned on the first page with no tab hint.
    pub fn new(registry: PageRegistry) -> Self {
        Self {
            registry,
            current: NavigationTarget::page(0),
            revision: 0,
        }
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn current(&self) -> &NavigationTarget {
        &self.current
    }

    pub fn page_index(&self) -> usize {
        self.current.page_index
    }

    pub fn tab(&self) -> Option<&str> {
        self.current.tab.as_deref()
    }

    pub fn render_key(&self) -> RenderKey {
        self.current.render_key()
    }

    /// Number of committed updates since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolve an identifier without committing anything.
    pub fn resolve(&self, identifier: &PageIdentifier) -> Option<usize> {
        match identifier {
            PageIdentifier::Index(index) => self.registry.contains(*index).then_some(*index),
            PageIdentifier::Alias(alias) => self.registry.resolve(alias),
        }
    }

    /// Navigate to a page by index or alias, with an optional tab hint.
    ///
    /// Returns whether the request resolved. Unresolvable identifiers leave
    /// the state untouched.
    pub fn navigate_to(&mut self, identifier: impl Into<PageIdentifier>, tab: Option<&str>) -> bool {
        let identifier = identifier.into();
        match self.resolve(&identifier) {
            Some(page_index) => {
                self.commit(NavigationTarget {
                    page_index,
                    tab: tab.map(str::to_string),
                });
                true
            }
            None => {
                tracing::debug!(%identifier, "navigation target did not resolve");
                false
            }
        }
    }

    /// Direct set for callers that already hold a valid page index.
    pub fn navigate_to_tab(&mut self, page_index: usize, tab: &str) -> bool {
        if !self.registry.contains(page_index) {
            tracing::warn!(page_index, tab, "page index out of range");
            return false;
        }
        self.commit(NavigationTarget::with_tab(page_index, tab));
        true
    }

    /// Move to a neighbouring page, clamped to the first and last page.
    pub fn step_page(&mut self, delta: isize) -> bool {
        let last = self.registry.len().saturating_sub(1) as isize;
        let target = (self.current.page_index as isize + delta).clamp(0, last) as usize;
        if target == self.current.page_index {
            return false;
        }
        self.navigate_to(target, None)
    }

    fn commit(&mut self, target: NavigationTarget) {
        tracing::debug!(page = target.page_index, tab = ?target.tab, "navigation committed");
        self.current = target;
        self.revision += 1;
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(PageRegistry::everest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_page() {
        let store = NavigationStore::default();
        assert_eq!(store.current(), &NavigationTarget::page(0));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_navigate_by_alias_sets_page_and_tab_together() {
        let mut store = NavigationStore::default();
        assert!(store.navigate_to("Analysis", Some("patterns")));
        assert_eq!(store.current(), &NavigationTarget::with_tab(4, "patterns"));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_unknown_alias_is_a_no_op() {
        let mut store = NavigationStore::default();
        store.navigate_to(3usize, Some("methods"));
        let before = store.current().clone();

        assert!(!store.navigate_to("not-a-real-alias", None));
        assert!(!store.navigate_to("not-a-real-alias", Some("patterns")));
        assert_eq!(store.current(), &before);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_a_no_op() {
        let mut store = NavigationStore::default();
        assert!(!store.navigate_to(6usize, None));
        assert!(!store.navigate_to_tab(42, "abstract"));
        assert_eq!(store.page_index(), 0);
    }

    #[test]
    fn test_navigate_without_tab_clears_previous_hint() {
        let mut store = NavigationStore::default();
        store.navigate_to_tab(5, "team");
        store.navigate_to("variables", None);
        assert_eq!(store.current(), &NavigationTarget::page(2));
    }

    #[test]
    fn test_navigate_to_tab_bypasses_alias_resolution() {
        let mut store = NavigationStore::default();
        assert!(store.navigate_to_tab(2, "route"));
        assert_eq!(store.tab(), Some("route"));
    }

    #[test]
    fn test_step_page_clamps_without_wrapping() {
        let mut store = NavigationStore::default();
        assert!(!store.step_page(-1));
        assert_eq!(store.page_index(), 0);

        store.navigate_to(5usize, None);
        assert!(!store.step_page(1));
        assert_eq!(store.page_index(), 5);

        assert!(store.step_page(-1));
        assert_eq!(store.page_index(), 4);
    }

    #[test]
    fn test_identifier_from_str() {
        assert_eq!("4".parse::<PageIdentifier>().unwrap(), PageIdentifier::Index(4));
        assert_eq!(
            "results".parse::<PageIdentifier>().unwrap(),
            PageIdentifier::Alias("results".to_string())
        );
        assert_eq!(
            "-1".parse::<PageIdentifier>().unwrap(),
            PageIdentifier::Alias("-1".to_string())
        );
    }

    #[test]
    fn test_render_key_distinguishes_tab_hint() {
        let plain = NavigationTarget::page(4).render_key();
        let deep = NavigationTarget::with_tab(4, "patterns").render_key();
        assert_ne!(plain, deep);
        assert_eq!(plain.to_string(), "4-default");
        assert_eq!(deep.to_string(), "4-patterns");
    }
}
