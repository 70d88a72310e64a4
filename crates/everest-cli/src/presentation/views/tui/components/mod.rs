//! Stateful viewer components.
//!
//! Each component owns its UI state (scroll offset, focus, selection) and
//! reports anything that touches navigation state as an [`Action`] for the
//! shell to apply.

mod landing;
mod menu;
mod report_page;
mod search;

pub use landing::LandingComponent;
pub use menu::MenuComponent;
pub use report_page::ReportPageComponent;
pub use search::SearchComponent;

use everest_core::PageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Resolve through the navigation store (index or alias)
    Navigate {
        page: PageIdentifier,
        tab: Option<String>,
    },
    /// Direct set for an already-valid (page, tab) pair
    NavigateToTab { page_index: usize, tab: String },
    /// Close the active overlay
    Close,
}
