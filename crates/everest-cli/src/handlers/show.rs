use anyhow::{Result, anyhow, bail};
use everest_core::{NavigationStore, PageIdentifier, PageRegistry, ReportContent};

use super::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    registry: PageRegistry,
    content: &ReportContent,
    page: &str,
    tab: Option<&str>,
    all: bool,
    ctx: &HandlerContext,
) -> Result<()> {
    let store = NavigationStore::new(registry);
    let identifier: PageIdentifier = page.parse()?;
    let index = store
        .resolve(&identifier)
        .ok_or_else(|| anyhow!("Unknown page '{}' (run `everest pages` for indices and aliases)", page))?;
    let page = registry
        .page(index)
        .ok_or_else(|| anyhow!("Page {} is not registered", index))?;

    let tabs: Vec<&str> = match tab {
        _ if all => page.tabs.iter().map(|t| t.value).collect(),
        Some(tab) if page.has_tab(tab) => vec![tab],
        Some(tab) => bail!("Page '{}' has no tab '{}'", page.name, tab),
        None => page
            .default_tab
            .or_else(|| page.tabs.first().map(|t| t.value))
            .into_iter()
            .collect(),
    };

    ctx.render(presenters::present_page_text(page, content, &tabs))
}
