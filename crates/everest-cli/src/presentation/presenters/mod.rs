pub mod report;
pub mod tui;

pub use report::*;
pub use tui::*;
