use super::common::ViewModeArgs;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive report viewer (default)")]
    View {
        #[arg(long, help = "Page index or alias to open on (e.g. 4, analysis)")]
        page: Option<String>,

        #[arg(long, requires = "page", help = "Tab to open the page on (e.g. patterns)")]
        tab: Option<String>,
    },

    #[command(about = "List report pages with their aliases and tabs")]
    Pages {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Search report sections by keyword")]
    Search {
        #[arg(required = true, help = "Search terms (any term may match)")]
        query: Vec<String>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Print a page or tab as text")]
    Show {
        #[arg(help = "Page index or alias")]
        page: String,

        #[arg(long, help = "Tab to print (default: the page's default tab)")]
        tab: Option<String>,

        #[arg(long, conflicts_with = "tab", help = "Print every tab of the page")]
        all: bool,
    },

    #[command(about = "Read or change the color theme")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Show the persisted theme")]
    Show,

    #[command(about = "Switch between light and dark")]
    Toggle,
}
