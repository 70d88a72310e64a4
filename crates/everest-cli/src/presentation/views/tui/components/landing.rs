use crossterm::event::{KeyCode, KeyEvent};
use everest_core::PageIdentifier;
use ratatui::{Frame, layout::Rect};

use super::Action;
use crate::presentation::view_models::{LandingLink, LandingViewModel};
use crate::presentation::views::tui::{LandingView, Palette};

// Padding, title, subtitle, summary and highlight rows above the link list
const HEADER_ROWS: u16 = 8;

pub struct LandingComponent {
    links: Vec<LandingLink>,
    focus: usize,
    scroll: u16,
}

impl LandingComponent {
    pub fn new(links: Vec<LandingLink>) -> Self {
        Self {
            links,
            focus: 0,
            scroll: 0,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_link(&self) -> Option<&LandingLink> {
        self.links.get(self.focus)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn reset_viewport(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Char('j') => {
                if !self.links.is_empty() {
                    self.focus = (self.focus + 1) % self.links.len();
                }
                None
            }
            KeyCode::BackTab | KeyCode::Char('k') => {
                if !self.links.is_empty() {
                    self.focus = self.focus.checked_sub(1).unwrap_or(self.links.len() - 1);
                }
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.focus = 0;
                self.reset_viewport();
                None
            }
            KeyCode::Enter => self.focused_link().map(|link| Action::Navigate {
                page: PageIdentifier::Index(link.page_index),
                tab: link.tab.clone(),
            }),
            _ => None,
        }
    }

    /// Render, scrolling just enough to keep the focused link visible.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &LandingViewModel, palette: Palette) {
        if !self.links.is_empty() && self.focus >= self.links.len() {
            self.focus = self.links.len() - 1;
        }

        let visible = usize::from(area.height.saturating_sub(HEADER_ROWS).max(1));
        let scroll = usize::from(self.scroll);
        let scroll = if self.focus < scroll {
            self.focus
        } else if self.focus >= scroll + visible {
            self.focus + 1 - visible
        } else {
            scroll
        };
        self.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

        f.render_widget(LandingView::new(data, palette, self.focus, self.scroll), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::landing_links;
    use crossterm::event::KeyModifiers;
    use everest_core::PageRegistry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_emits_deep_link() {
        let mut component = LandingComponent::new(landing_links(&PageRegistry::everest()));
        component.handle_input(key(KeyCode::Tab));

        let action = component.handle_input(key(KeyCode::Enter));
        assert_eq!(
            action,
            Some(Action::Navigate {
                page: PageIdentifier::Index(1),
                tab: Some("abstract".to_string()),
            })
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let links = landing_links(&PageRegistry::everest());
        let last = links.len() - 1;
        let mut component = LandingComponent::new(links);

        component.handle_input(key(KeyCode::BackTab));
        assert_eq!(component.focus(), last);
        component.handle_input(key(KeyCode::Tab));
        assert_eq!(component.focus(), 0);
    }

    #[test]
    fn test_empty_links_are_inert() {
        let mut component = LandingComponent::new(Vec::new());
        component.handle_input(key(KeyCode::Tab));
        assert_eq!(component.handle_input(key(KeyCode::Enter)), None);
    }
}
