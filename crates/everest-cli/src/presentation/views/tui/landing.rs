use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use super::palette::Palette;
use crate::presentation::view_models::LandingViewModel;

pub struct LandingView<'a> {
    model: &'a LandingViewModel,
    palette: Palette,
    focus: usize,
    scroll: u16,
}

impl<'a> LandingView<'a> {
    pub fn new(model: &'a LandingViewModel, palette: Palette, focus: usize, scroll: u16) -> Self {
        Self {
            model,
            palette,
            focus,
            scroll,
        }
    }
}

impl<'a> Widget for LandingView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::new(4, 4, 1, 0));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(Span::styled(self.model.title.to_uppercase(), self.palette.heading()))
            .render(chunks[0], buf);
        Paragraph::new(Span::styled(self.model.subtitle.as_str(), self.palette.accent()))
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);
        Paragraph::new(Span::styled(self.model.summary.as_str(), self.palette.muted()))
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);

        let mut stats = Vec::new();
        for highlight in &self.model.highlights {
            stats.push(Span::styled(highlight.value.as_str(), self.palette.heading()));
            stats.push(Span::styled(format!(" {}    ", highlight.label), self.palette.muted()));
        }
        Paragraph::new(Line::from(stats)).render(chunks[3], buf);

        let focus = self.focus.min(self.model.links.len().saturating_sub(1));
        let lines: Vec<Line> = self
            .model
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let text = match link.tab {
                    Some(_) => format!("    {}", link.label),
                    None => format!("▸ {}", link.label),
                };
                let style = if i == focus {
                    self.palette.selected()
                } else if link.tab.is_none() {
                    self.palette.heading()
                } else {
                    self.palette.base()
                };
                Line::from(Span::styled(text, style))
            })
            .collect();

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(chunks[4], buf);
    }
}
