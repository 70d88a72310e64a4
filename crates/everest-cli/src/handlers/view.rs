use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Result, bail};
use everest_core::{FilePreferenceStore, PageIdentifier, PageRegistry, ReportContent, SearchIndex, ThemeState};
use is_terminal::IsTerminal;

use crate::config::Config;
use crate::presentation::{DisplayShell, TuiRenderer};

pub fn handle(
    registry: PageRegistry,
    content: ReportContent,
    data_dir: &Path,
    config: &Config,
    page: Option<String>,
    tab: Option<String>,
) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("The viewer needs an interactive terminal; use `everest show <page>` to print text");
    }

    let theme = ThemeState::init(FilePreferenceStore::in_dir(data_dir));
    let mut shell = DisplayShell::new(
        registry,
        content,
        SearchIndex::everest(),
        theme,
        config.ui.clone(),
    );

    if let Some(page) = page {
        let identifier: PageIdentifier = page.parse()?;
        if !shell.navigate(identifier, tab.as_deref()) {
            tracing::warn!(%page, "deep link did not resolve");
            shell.notify(format!("Unknown page '{}'", page));
        }
    }

    TuiRenderer::new(Duration::from_millis(config.ui.tick_rate_ms)).run(shell)
}
