use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs, Widget, Wrap},
};

use super::palette::Palette;
use crate::presentation::view_models::ReportPageViewModel;

const PADDING_COLUMNS: u16 = 2;

/// A tabbed report page: header, tab strip, scrolled body and footer.
pub struct ReportPageView<'a> {
    model: &'a ReportPageViewModel,
    palette: Palette,
    scroll: u16,
}

impl<'a> ReportPageView<'a> {
    /// Rows taken by header, tab strip and footer
    pub const CHROME_ROWS: u16 = 5;

    pub fn new(model: &'a ReportPageViewModel, palette: Palette, scroll: u16) -> Self {
        Self {
            model,
            palette,
            scroll,
        }
    }

    /// Rows the body occupies once wrapped inside a page `area_width` wide.
    pub fn body_height(model: &ReportPageViewModel, area_width: u16) -> u16 {
        let width = area_width.saturating_sub(2 * PADDING_COLUMNS);
        let rows = body(model).line_count(width);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn footer(&self) -> Line<'a> {
        let enabled = self.palette.accent();
        let disabled = self.palette.muted();

        let previous = match &self.model.footer.previous {
            Some(label) => Span::styled(format!("◀ {}", label), enabled),
            None => Span::styled("◀ Previous", disabled),
        };
        let next = match &self.model.footer.next {
            Some(label) => Span::styled(format!("{} ▶", label), enabled),
            None => Span::styled("Next ▶", disabled),
        };

        Line::from(vec![
            previous,
            Span::styled("   ⤒ Back to top   ", self.palette.muted()),
            next,
        ])
        .centered()
    }
}

impl<'a> Widget for ReportPageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(PADDING_COLUMNS));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(Span::styled(self.model.title.as_str(), self.palette.heading()))
            .render(chunks[0], buf);
        Paragraph::new(Span::styled(self.model.subtitle.as_str(), self.palette.muted()))
            .render(chunks[1], buf);

        let titles: Vec<Line> = self
            .model
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.label)))
            .collect();
        let active = self.model.active_tab.min(titles.len().saturating_sub(1));
        Tabs::new(titles)
            .select(active)
            .style(self.palette.muted())
            .highlight_style(self.palette.selected())
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(self.palette.muted()),
            )
            .render(chunks[2], buf);

        body(self.model)
            .style(self.palette.base())
            .scroll((self.scroll, 0))
            .render(chunks[3], buf);

        Paragraph::new(self.footer()).render(chunks[4], buf);
    }
}

/// The body paragraph, shared by drawing and scroll clamping so both wrap
/// the same way.
fn body(model: &ReportPageViewModel) -> Paragraph<'_> {
    Paragraph::new(model.body.trim_start_matches('\n')).wrap(Wrap { trim: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{FooterViewModel, TabEntry};

    fn model(body: &str) -> ReportPageViewModel {
        ReportPageViewModel {
            title: "Introduction".to_string(),
            subtitle: String::new(),
            tabs: Vec::new(),
            active_tab: 0,
            body: body.to_string(),
            footer: FooterViewModel {
                previous: None,
                next: None,
            },
        }
    }

    #[test]
    fn test_body_height_wraps_at_word_boundaries() {
        // 5 columns inside the padding: "ab" / "cdef" / "gh"
        assert_eq!(ReportPageView::body_height(&model("ab cdef gh"), 9), 3);
    }

    #[test]
    fn test_snapshot_clones_with_tab_entries() {
        let mut original = model("Purpose");
        original.tabs.push(TabEntry {
            value: "abstract".to_string(),
            label: "Abstract".to_string(),
            is_default: true,
        });

        let copy = original.clone();
        assert_eq!(copy.tabs[0].value, "abstract");
        assert_eq!(copy.body, original.body);
    }

    #[test]
    fn test_body_height_ignores_leading_newlines() {
        assert_eq!(ReportPageView::body_height(&model("\n\none\n\ntwo"), 40), 3);
    }
}
