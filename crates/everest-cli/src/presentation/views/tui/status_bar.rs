//! Bottom bar: page indicator, transient message and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::palette::Palette;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Length(9), Constraint::Min(0)]).split(area);

        let indicator = format!(" {} / {} ", self.model.page_number, self.model.page_count);
        Paragraph::new(Span::styled(indicator, self.palette.accent())).render(chunks[0], buf);

        let line = match &self.model.message {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                ratatui::style::Style::default().fg(self.palette.warning),
            )),
            None => {
                let mut spans = Vec::new();
                for hint in &self.model.hints {
                    spans.push(Span::styled(format!("[{}]", hint.key), self.palette.accent()));
                    spans.push(Span::styled(format!(" {}  ", hint.action), self.palette.muted()));
                }
                Line::from(spans)
            }
        };
        Paragraph::new(line).render(chunks[1], buf);
    }
}
