pub mod components;
mod landing;
mod nav_bar;
pub mod palette;
mod report_page;
mod status_bar;

pub use landing::LandingView;
pub use nav_bar::NavBarView;
pub use palette::Palette;
pub use report_page::ReportPageView;
pub use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rectangle centered in `area`, sized as a percentage of it.
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
