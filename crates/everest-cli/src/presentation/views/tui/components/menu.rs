use crossterm::event::{KeyCode, KeyEvent};
use everest_core::PageIdentifier;
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use super::Action;
use crate::presentation::view_models::MenuEntry;
use crate::presentation::views::tui::{Palette, centered_rect};

/// Section menu listing every (page, tab) pair.
#[derive(Default)]
pub struct MenuComponent {
    entries: Vec<MenuEntry>,
    state: ListState,
}

impl MenuComponent {
    /// Replace the entries and preselect the current one.
    pub fn open(&mut self, entries: Vec<MenuEntry>) {
        let current = entries.iter().position(|e| e.current).unwrap_or(0);
        self.state.select((!entries.is_empty()).then_some(current));
        self.entries = entries;
    }

    pub fn selected(&self) -> Option<&MenuEntry> {
        self.state.selected().and_then(|i| self.entries.get(i))
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::Close),
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.entries.is_empty() {
                    let next = self
                        .state
                        .selected()
                        .map_or(0, |i| (i + 1).min(self.entries.len() - 1));
                    self.state.select(Some(next));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.state.selected() {
                    self.state.select(Some(i.saturating_sub(1)));
                }
                None
            }
            KeyCode::Enter => {
                let entry = self.selected()?;
                Some(match &entry.tab {
                    Some(tab) => Action::NavigateToTab {
                        page_index: entry.page_index,
                        tab: tab.clone(),
                    },
                    None => Action::Navigate {
                        page: PageIdentifier::Index(entry.page_index),
                        tab: None,
                    },
                })
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, palette: Palette) {
        let popup = centered_rect(area, 50, 80);
        f.render_widget(Clear, popup);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.tab.is_none() {
                    palette.heading()
                } else {
                    palette.base()
                };
                ListItem::new(Span::styled(entry.label.as_str(), style))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.accent())
                    .title(" Sections ")
                    .style(palette.base()),
            )
            .highlight_style(palette.selected())
            .highlight_symbol("▸ ");
        f.render_stateful_widget(list, popup, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_menu;
    use crossterm::event::KeyModifiers;
    use everest_core::PageRegistry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_preselects_current_entry() {
        let mut menu = MenuComponent::default();
        menu.open(present_menu(&PageRegistry::everest(), 4, Some("visualizations")));
        assert_eq!(
            menu.selected().and_then(|e| e.tab.as_deref()),
            Some("visualizations")
        );
    }

    #[test]
    fn test_enter_on_tab_row_sets_page_and_tab() {
        let mut menu = MenuComponent::default();
        menu.open(present_menu(&PageRegistry::everest(), 4, Some("regression")));
        menu.handle_input(key(KeyCode::Down));

        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(Action::NavigateToTab {
                page_index: 4,
                tab: "visualizations".to_string(),
            })
        );
    }

    #[test]
    fn test_enter_on_page_row_navigates_by_index() {
        let mut menu = MenuComponent::default();
        menu.open(present_menu(&PageRegistry::everest(), 1, None));
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(Action::Navigate {
                page: PageIdentifier::Index(1),
                tab: None,
            })
        );
    }

    #[test]
    fn test_escape_closes() {
        let mut menu = MenuComponent::default();
        assert_eq!(menu.handle_input(key(KeyCode::Esc)), Some(Action::Close));
    }
}
