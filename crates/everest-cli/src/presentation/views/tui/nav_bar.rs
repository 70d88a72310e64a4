//! Top navigation bar: Home, page names, theme indicator and search hint.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::palette::Palette;
use crate::presentation::view_models::NavBarViewModel;

pub struct NavBarView<'a> {
    model: &'a NavBarViewModel,
    palette: Palette,
}

impl<'a> NavBarView<'a> {
    pub fn new(model: &'a NavBarViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for NavBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.palette.muted());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).split(inner);

        let mut spans = vec![Span::styled(" ⌂ Home ", self.palette.accent()), Span::raw("│")];
        for item in &self.model.items {
            let style = if item.active {
                self.palette.selected()
            } else {
                self.palette.base()
            };
            spans.push(Span::styled(format!(" {} ", item.name), style));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let theme = if self.model.is_dark { "☾ dark" } else { "☀ light" };
        let right = Line::from(vec![
            Span::styled(theme, self.palette.muted()),
            Span::raw("  "),
            Span::styled("^K search", self.palette.accent()),
        ])
        .right_aligned();
        Paragraph::new(right).render(chunks[1], buf);
    }
}
