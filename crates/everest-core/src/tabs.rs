//! Per-page tab state with bounded previous/next sequencing.
//!
//! One `TabController` is built per page mount and dropped on unmount, so a
//! page never remembers its tab across navigations.

use crate::error::{Error, Result};
use crate::navigation::NavigationTarget;

/// Outcome of a tab operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStep {
    /// The active tab changed; the viewport must scroll back to the top
    Moved(String),
    /// Nothing observable happened
    Unchanged,
    /// A boundary override fired; the caller routes it to the navigation store
    Navigate(NavigationTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BoundaryOverride {
    target: NavigationTarget,
    label: String,
}

#[derive(Debug, Clone)]
pub struct TabController {
    tabs: Vec<String>,
    default_index: usize,
    active: usize,
    previous_override: Option<BoundaryOverride>,
    next_override: Option<BoundaryOverride>,
}

impl TabController {
    /// Build a controller over an ordered, unique, non-empty tab list.
    ///
    /// A `default_tab` that is not in the list falls back to the first tab.
    pub fn new<I, S>(tabs: I, default_tab: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sequence: Vec<String> = Vec::new();
        for tab in tabs {
            let tab = tab.into();
            if sequence.contains(&tab) {
                return Err(Error::DuplicateTab(tab));
            }
            sequence.push(tab);
        }

        if sequence.is_empty() {
            return Err(Error::EmptyTabSequence);
        }

        let default_index = sequence.iter().position(|t| t == default_tab).unwrap_or(0);

        Ok(Self {
            tabs: sequence,
            default_index,
            active: default_index,
            previous_override: None,
            next_override: None,
        })
    }

    /// Replace "previous" on the first tab with a jump to another page.
    pub fn with_previous_override(mut self, target: NavigationTarget, label: impl Into<String>) -> Self {
        self.previous_override = Some(BoundaryOverride {
            target,
            label: label.into(),
        });
        self
    }

    /// Replace "next" on the last tab with a jump to another page.
    pub fn with_next_override(mut self, target: NavigationTarget, label: impl Into<String>) -> Self {
        self.next_override = Some(BoundaryOverride {
            target,
            label: label.into(),
        });
        self
    }

    /// Apply the mount-time inbound tab. Non-members leave the default active.
    pub fn seeded(mut self, inbound: Option<&str>) -> Self {
        self.active = inbound
            .and_then(|tab| self.position(tab))
            .unwrap_or(self.default_index);
        self
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active_tab(&self) -> &str {
        &self.tabs[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn default_tab(&self) -> &str {
        &self.tabs[self.default_index]
    }

    /// Direct jump. Values outside the sequence are ignored.
    pub fn set_active_tab(&mut self, tab: &str) -> TabStep {
        match self.position(tab) {
            Some(index) => self.move_to(index),
            None => {
                tracing::debug!(tab, "ignoring tab outside sequence");
                TabStep::Unchanged
            }
        }
    }

    /// Select by 0-based position.
    pub fn select_index(&mut self, index: usize) -> TabStep {
        if index < self.tabs.len() {
            self.move_to(index)
        } else {
            TabStep::Unchanged
        }
    }

    pub fn go_previous(&mut self) -> TabStep {
        if self.active > 0 {
            return self.move_to(self.active - 1);
        }
        match &self.previous_override {
            Some(boundary) => TabStep::Navigate(boundary.target.clone()),
            None => TabStep::Unchanged,
        }
    }

    pub fn go_next(&mut self) -> TabStep {
        if self.active + 1 < self.tabs.len() {
            return self.move_to(self.active + 1);
        }
        match &self.next_override {
            Some(boundary) => TabStep::Navigate(boundary.target.clone()),
            None => TabStep::Unchanged,
        }
    }

    /// Whether the previous control does anything from the current tab.
    pub fn has_previous(&self) -> bool {
        self.active > 0 || self.previous_override.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.active + 1 < self.tabs.len() || self.next_override.is_some()
    }

    pub fn previous_label(&self) -> &str {
        match &self.previous_override {
            Some(boundary) if self.active == 0 => &boundary.label,
            _ => "Previous",
        }
    }

    pub fn next_label(&self) -> &str {
        match &self.next_override {
            Some(boundary) if self.active + 1 == self.tabs.len() => &boundary.label,
            _ => "Next",
        }
    }

    fn position(&self, tab: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t == tab)
    }

    fn move_to(&mut self, index: usize) -> TabStep {
        if index == self.active {
            return TabStep::Unchanged;
        }
        self.active = index;
        TabStep::Moved(self.tabs[index].clone())
    }
}
