//! Report Page Component
//!
//! Owns one mount of a tabbed page: its tab controller and viewport offset.
//! Dropping the component drops the tab state with it.

use crossterm::event::{KeyCode, KeyEvent};
use everest_core::{Page, PageIdentifier, PageRegistry, TabController, TabStep};
use ratatui::{Frame, layout::Rect};

use super::Action;
use crate::config::UiConfig;
use crate::presentation::view_models::ReportPageViewModel;
use crate::presentation::views::tui::{Palette, ReportPageView};

pub struct ReportPageComponent {
    page: &'static Page,
    tabs: TabController,
    scroll: u16,
}

impl ReportPageComponent {
    /// Mount `page`, seeding the active tab from `inbound` when it is valid.
    pub fn mount(page: &'static Page, registry: &PageRegistry, inbound: Option<&str>) -> Option<Self> {
        let tabs = page.mount_tabs(registry, inbound)?;
        tracing::debug!(page = page.index, tab = tabs.active_tab(), "page mounted");
        Some(Self {
            page,
            tabs,
            scroll: 0,
        })
    }

    pub fn page(&self) -> &'static Page {
        self.page
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn reset_viewport(&mut self) {
        self.scroll = 0;
    }

    pub fn handle_input(&mut self, key: KeyEvent, ui: &UiConfig) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                let step = self.tabs.go_previous();
                self.apply(step)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let step = self.tabs.go_next();
                self.apply(step)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let step = self.tabs.select_index(index);
                self.apply(step)
            }
            KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(ui.scroll_step);
                None
            }
            KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(ui.scroll_step);
                None
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(ui.page_scroll_step);
                None
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(ui.page_scroll_step);
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.reset_viewport();
                None
            }
            _ => None,
        }
    }

    /// Render with the scroll offset clamped to the body height.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &ReportPageViewModel, palette: Palette) {
        let body_rows = area.height.saturating_sub(ReportPageView::CHROME_ROWS);
        let max_scroll = ReportPageView::body_height(data, area.width).saturating_sub(body_rows);
        self.scroll = self.scroll.min(max_scroll);

        f.render_widget(ReportPageView::new(data, palette, self.scroll), area);
    }

    fn apply(&mut self, step: TabStep) -> Option<Action> {
        match step {
            TabStep::Moved(tab) => {
                tracing::debug!(page = self.page.index, %tab, "tab changed");
                self.reset_viewport();
                None
            }
            TabStep::Unchanged => None,
            TabStep::Navigate(target) => Some(Action::Navigate {
                page: PageIdentifier::Index(target.page_index),
                tab: target.tab,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mount(index: usize, inbound: Option<&str>) -> ReportPageComponent {
        let registry = PageRegistry::everest();
        let page = registry.page(index).expect("page");
        ReportPageComponent::mount(page, &registry, inbound).expect("report page")
    }

    #[test]
    fn test_tab_change_resets_viewport() {
        let ui = UiConfig::default();
        let mut component = mount(4, None);
        component.handle_input(key(KeyCode::Char('j')), &ui);
        assert_eq!(component.scroll(), 3);

        assert_eq!(component.handle_input(key(KeyCode::Right), &ui), None);
        assert_eq!(component.tabs().active_tab(), "visualizations");
        assert_eq!(component.scroll(), 0);
    }

    #[test]
    fn test_unchanged_tab_keeps_viewport() {
        let ui = UiConfig::default();
        let mut component = mount(4, Some("patterns"));
        component.handle_input(key(KeyCode::PageDown), &ui);
        component.handle_input(key(KeyCode::Right), &ui);
        assert_eq!(component.tabs().active_tab(), "patterns");
        assert_eq!(component.scroll(), 10);
    }

    #[test]
    fn test_boundary_override_becomes_navigation() {
        let ui = UiConfig::default();
        let mut component = mount(1, None);
        let action = component.handle_input(key(KeyCode::Char('h')), &ui);
        assert_eq!(
            action,
            Some(Action::Navigate {
                page: PageIdentifier::Index(0),
                tab: None,
            })
        );
    }

    #[test]
    fn test_digit_selects_tab() {
        let ui = UiConfig::default();
        let mut component = mount(2, None);
        component.handle_input(key(KeyCode::Char('4')), &ui);
        assert_eq!(component.tabs().active_tab(), "route");

        component.handle_input(key(KeyCode::Char('9')), &ui);
        assert_eq!(component.tabs().active_tab(), "route");
    }
}
