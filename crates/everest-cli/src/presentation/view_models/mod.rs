pub mod common;
pub mod report;
pub mod result;
pub mod tui;

pub use common::*;
pub use report::*;
pub use result::*;
pub use tui::*;

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
