//! Search overlay: a query line over live keyword matches.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use everest_core::{PageIdentifier, PageRegistry, SearchEntry, SearchIndex};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::Action;
use crate::presentation::views::tui::{Palette, centered_rect};

pub struct SearchComponent {
    index: SearchIndex,
    query: String,
    state: ListState,
}

impl SearchComponent {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            query: String::new(),
            state: ListState::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> Vec<&'static SearchEntry> {
        self.index.query(&self.query)
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.state.select(None);
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Close),
            KeyCode::Enter => {
                let results = self.results();
                let hit = results.get(self.state.selected().unwrap_or(0))?;
                let action = Action::Navigate {
                    page: PageIdentifier::Index(hit.page_index),
                    tab: None,
                };
                self.clear();
                Some(action)
            }
            KeyCode::Down => {
                let len = self.results().len();
                if len > 0 {
                    let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
                    self.state.select(Some(next));
                }
                None
            }
            KeyCode::Up => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.reset_selection();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                self.reset_selection();
                None
            }
            _ => None,
        }
    }

    fn reset_selection(&mut self) {
        let selection = (!self.results().is_empty()).then_some(0);
        self.state.select(selection);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, registry: &PageRegistry, palette: Palette) {
        let popup = centered_rect(area, 60, 60);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.accent())
            .title(" Search ")
            .style(palette.base());
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let [input_area, results_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let input = Line::from(vec![
            Span::styled("> ", palette.accent()),
            Span::styled(self.query.as_str(), palette.heading()),
            Span::styled("█", palette.muted()),
        ]);
        f.render_widget(Paragraph::new(input), input_area);

        let results = self.results();
        if results.is_empty() {
            let message = if self.query.trim().is_empty() {
                "Start typing to search..."
            } else {
                "No results found"
            };
            f.render_widget(
                Paragraph::new(Span::styled(message, palette.muted())),
                results_area,
            );
            return;
        }

        if self.state.selected().is_some_and(|i| i >= results.len()) {
            self.state.select(Some(results.len() - 1));
        }

        let items: Vec<ListItem> = results
            .iter()
            .map(|hit| {
                ListItem::new(Line::from(vec![
                    Span::styled(hit.section_label, palette.heading()),
                    Span::styled(format!("  {}", registry.name_of(hit.page_index)), palette.muted()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(palette.selected())
            .highlight_symbol("▸ ");
        f.render_stateful_widget(list, results_area, &mut self.state);
    }
}
