//! # Presentation Layer
//!
//! MVVM split shared by the console commands and the interactive viewer.
//!
//! ```text
//! Console:  [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] --> JSON | View
//!
//! Viewer:   [ DisplayShell ] --> [ Presenter ] --> [ ViewModel ]
//!                 |                                     |
//!                 v                                     v
//!           [ Component ] <-- key input           [ View (Widget) ]
//!           (scroll, focus, tab state)
//! ```
//!
//! ## Rules
//!
//! * `view_models/` hold raw data and implement `Serialize`. JSON output
//!   always dumps the full view model and ignores `ViewMode`.
//! * `ViewMode` controls text density only: Minimal prints identifiers for
//!   scripts, Compact one line per item, Standard tables, Verbose every field.
//! * `presenters/` are pure functions from core types to view models.
//! * `views/` implement `fmt::Display` or ratatui `Widget`. They own layout
//!   and colour, never state.
//! * `views/tui/components/` own UI state (scroll offset, focus, selected
//!   tab) and clamp it against the data before drawing. Anything that moves
//!   between pages is returned as an `Action`, never applied in place.
//! * `renderers/` drive output. The TUI shell routes keys and owns the
//!   mounted page; it does not decide page content.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, DisplayShell, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel, Tip, ViewMode,
};
