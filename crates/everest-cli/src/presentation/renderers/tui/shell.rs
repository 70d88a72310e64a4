//! Display shell for the interactive viewer.
//!
//! The shell routes keys and owns the mounted page. After every navigation
//! store update it compares the store's render key with the key of the
//! mounted page: a different key drops the old page component, mounts a new
//! one seeded with the inbound tab and resets the viewport. An equal key
//! leaves the mounted page (and the tab the reader picked) alone.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use everest_core::{
    NavigationStore, PageIdentifier, PageKind, PageRegistry, PreferenceStore, RenderKey,
    ReportContent, SearchIndex, ThemeState,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};

use crate::config::UiConfig;
use crate::presentation::presenters::{
    HintSet, landing_links, present_landing, present_menu, present_nav_bar, present_report_page,
    present_status_bar,
};
use crate::presentation::views::tui::components::{
    Action, LandingComponent, MenuComponent, ReportPageComponent, SearchComponent,
};
use crate::presentation::views::tui::{NavBarView, Palette, StatusBarView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Search,
    Menu,
}

enum PageView {
    Landing(LandingComponent),
    Report(ReportPageComponent),
}

impl PageView {
    fn reset_viewport(&mut self) {
        match self {
            PageView::Landing(c) => c.reset_viewport(),
            PageView::Report(c) => c.reset_viewport(),
        }
    }
}

struct MountedPage {
    key: RenderKey,
    view: PageView,
}

pub struct DisplayShell<S: PreferenceStore> {
    store: NavigationStore,
    content: ReportContent,
    theme: ThemeState<S>,
    ui: UiConfig,
    mounted: MountedPage,
    search: SearchComponent,
    menu: MenuComponent,
    overlay: Overlay,
    message: Option<String>,
    mounts: u64,
    should_quit: bool,
}

impl<S: PreferenceStore> DisplayShell<S> {
    pub fn new(
        registry: PageRegistry,
        content: ReportContent,
        search_index: SearchIndex,
        theme: ThemeState<S>,
        ui: UiConfig,
    ) -> Self {
        let store = NavigationStore::new(registry);
        let mounted = mount(&registry, store.render_key());

        Self {
            store,
            content,
            theme,
            ui,
            mounted,
            search: SearchComponent::new(search_index),
            menu: MenuComponent::default(),
            overlay: Overlay::None,
            message: None,
            mounts: 1,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &NavigationStore {
        &self.store
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Show `message` in the status bar until the next key press.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Number of page mounts since construction, the initial one included.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    pub fn mounted_key(&self) -> &RenderKey {
        &self.mounted.key
    }

    /// Active tab of the mounted page; `None` on the landing page.
    pub fn active_tab(&self) -> Option<&str> {
        match &self.mounted.view {
            PageView::Report(c) => Some(c.tabs().active_tab()),
            PageView::Landing(_) => None,
        }
    }

    pub fn scroll_offset(&self) -> u16 {
        match &self.mounted.view {
            PageView::Report(c) => c.scroll(),
            PageView::Landing(c) => c.scroll(),
        }
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    /// Navigate by index or alias and commit the result to the display.
    pub fn navigate(&mut self, page: impl Into<PageIdentifier>, tab: Option<&str>) -> bool {
        let moved = self.store.navigate_to(page, tab);
        if moved {
            self.commit();
        }
        moved
    }

    pub fn navigate_to_tab(&mut self, page_index: usize, tab: &str) -> bool {
        let moved = self.store.navigate_to_tab(page_index, tab);
        if moved {
            self.commit();
        }
        moved
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.message = None;

        let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('k') if chord => {
                self.open_search();
                return;
            }
            _ => {}
        }

        let action = match self.overlay {
            Overlay::Search => self.search.handle_input(key),
            Overlay::Menu => self.menu.handle_input(key),
            Overlay::None => self.handle_page_key(key),
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                None
            }
            KeyCode::Char('m') => {
                self.open_menu();
                None
            }
            KeyCode::Up => {
                if self.store.step_page(-1) {
                    self.commit();
                }
                None
            }
            KeyCode::Down => {
                if self.store.step_page(1) {
                    self.commit();
                }
                None
            }
            _ => match &mut self.mounted.view {
                PageView::Landing(c) => c.handle_input(key),
                PageView::Report(c) => c.handle_input(key, &self.ui),
            },
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate { page, tab } => {
                self.overlay = Overlay::None;
                self.navigate(page, tab.as_deref());
            }
            Action::NavigateToTab { page_index, tab } => {
                self.overlay = Overlay::None;
                self.navigate_to_tab(page_index, &tab);
            }
            Action::Close => {
                self.overlay = Overlay::None;
            }
        }
    }

    fn open_search(&mut self) {
        self.search.clear();
        self.overlay = Overlay::Search;
    }

    fn open_menu(&mut self) {
        let entries = present_menu(self.store.registry(), self.store.page_index(), self.active_tab());
        self.menu.open(entries);
        self.overlay = Overlay::Menu;
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => tracing::info!(%theme, "theme toggled"),
            Err(err) => {
                tracing::warn!(%err, "theme preference not saved");
                self.message = Some(format!("Theme not saved: {}", err));
            }
        }
    }

    /// Remount when the store's render key differs from the mounted one.
    fn commit(&mut self) {
        let key = self.store.render_key();
        if key == self.mounted.key {
            tracing::trace!(%key, "render key unchanged");
            return;
        }

        tracing::debug!(from = %self.mounted.key, to = %key, "remounting page");
        self.mounted = mount(self.store.registry(), key);
        self.mounted.view.reset_viewport();
        self.mounts += 1;
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let palette = Palette::for_theme(self.theme.theme());
        let registry = *self.store.registry();
        let current = self.store.page_index();
        let area = f.area();

        f.render_widget(Block::default().style(palette.base()), area);

        let on_landing = matches!(self.mounted.view, PageView::Landing(_));
        let nav_rows = if on_landing { 0 } else { 2 };
        let [nav_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(nav_rows),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if !on_landing {
            let nav = present_nav_bar(&registry, current, self.theme.is_dark());
            f.render_widget(NavBarView::new(&nav, palette), nav_area);
        }

        match &mut self.mounted.view {
            PageView::Landing(component) => {
                let data = present_landing(&registry, &self.content);
                component.render(f, body_area, &data, palette);
            }
            PageView::Report(component) => {
                let data = present_report_page(component.page(), &self.content, component.tabs());
                component.render(f, body_area, &data, palette);
            }
        }

        let hints = match (self.overlay, on_landing) {
            (Overlay::Search, _) => HintSet::Search,
            (Overlay::Menu, _) => HintSet::Menu,
            (Overlay::None, true) => HintSet::Landing,
            (Overlay::None, false) => HintSet::Page,
        };
        let status = present_status_bar(&registry, current, self.message.as_deref(), hints);
        f.render_widget(StatusBarView::new(&status, palette), status_area);

        match self.overlay {
            Overlay::Search => self.search.render(f, area, &registry, palette),
            Overlay::Menu => self.menu.render(f, area, palette),
            Overlay::None => {}
        }
    }
}

fn mount(registry: &PageRegistry, key: RenderKey) -> MountedPage {
    let page = registry
        .page(key.page_index)
        .filter(|page| page.kind == PageKind::Report);

    let view = match page.and_then(|page| ReportPageComponent::mount(page, registry, key.tab.as_deref())) {
        Some(component) => PageView::Report(component),
        None => PageView::Landing(LandingComponent::new(landing_links(registry))),
    };

    MountedPage { key, view }
}
