use std::path::Path;

use anyhow::Result;
use everest_core::{FilePreferenceStore, ThemeState};

use super::HandlerContext;
use crate::args::ThemeCommand;
use crate::presentation::presenters;

pub fn handle(command: ThemeCommand, data_dir: &Path, ctx: &HandlerContext) -> Result<()> {
    let store = FilePreferenceStore::in_dir(data_dir);
    let path = store.path().to_path_buf();
    let mut state = ThemeState::init(store);

    match command {
        ThemeCommand::Show => ctx.render(presenters::present_theme(state.theme(), false, &path)),
        ThemeCommand::Toggle => {
            let theme = state.toggle()?;
            tracing::info!(%theme, path = %path.display(), "theme saved");
            ctx.render(presenters::present_theme(theme, true, &path))
        }
    }
}
