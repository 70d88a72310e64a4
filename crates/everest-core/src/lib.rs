//! State model for the Everest report viewer.
//!
//! This crate owns everything the viewer needs that is not terminal drawing:
//!
//! - [`PageRegistry`]: the six report pages, their tabs and deep-link aliases
//! - [`NavigationStore`]: the current page plus the tab it should open on
//! - [`TabController`]: per-mount tab state with bounded previous/next
//! - [`SearchIndex`]: keyword lookup across report sections
//! - [`ThemeState`]: the dark/light flag, persisted through a [`PreferenceStore`]
//! - [`ReportContent`]: the report text itself
//!
//! # Example
//!
//! ```
//! use everest_core::{NavigationStore, PageRegistry};
//!
//! let registry = PageRegistry::everest();
//! let mut store = NavigationStore::new(registry);
//! store.navigate_to("analysis", Some("patterns"));
//!
//! let page = registry.page(store.page_index()).unwrap();
//! let tabs = page.mount_tabs(&registry, store.tab()).unwrap();
//! assert_eq!(tabs.active_tab(), "patterns");
//! ```

pub mod content;
pub mod error;
pub mod navigation;
pub mod preferences;
pub mod registry;
pub mod search;
pub mod tabs;
pub mod theme;

pub use content::{Highlight, PageContent, ReportContent};
pub use error::{Error, Result};
pub use navigation::{NavigationStore, NavigationTarget, PageIdentifier, RenderKey};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use registry::{Page, PageKind, PageLink, PageRegistry, TabSpec};
pub use search::{SearchEntry, SearchIndex};
pub use tabs::{TabController, TabStep};
pub use theme::{THEME_SLOT, Theme, ThemeState};
