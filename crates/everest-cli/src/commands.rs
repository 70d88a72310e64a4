use super::args::{Cli, Commands, ViewModeArgs};
use super::handlers::{self, HandlerContext};
use crate::config::{Config, resolve_data_dir};
use crate::logging::{LogConfig, init_logging};
use anyhow::Result;
use everest_core::{PageRegistry, ReportContent, SearchIndex};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_in(&data_dir)?;

    let command = cli.command.unwrap_or(Commands::View {
        page: None,
        tab: None,
    });

    // The viewer owns the terminal, so its logs go to a file
    let log_config = match command {
        Commands::View { .. } => LogConfig::file(cli.log_level, config.log_path(&data_dir)),
        _ => LogConfig::stderr(cli.log_level),
    };
    init_logging(&log_config)?;
    tracing::debug!(data_dir = %data_dir.display(), "configuration loaded");

    let registry = PageRegistry::everest();
    let content = ReportContent::load(cli.content.as_deref(), &registry)?;

    match command {
        Commands::View { page, tab } => {
            handlers::view::handle(registry, content, &data_dir, &config, page, tab)
        }

        Commands::Pages { view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::pages::handle(&registry, &ctx)
        }

        Commands::Search { query, view_mode } => {
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::search::handle(&query, &SearchIndex::everest(), &registry, &ctx)
        }

        Commands::Show { page, tab, all } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::show::handle(registry, &content, &page, tab.as_deref(), all, &ctx)
        }

        Commands::Theme { command } => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::theme::handle(command, &data_dir, &ctx)
        }
    }
}
