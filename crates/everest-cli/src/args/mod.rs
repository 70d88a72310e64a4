mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "everest")]
#[command(about = "Browse the Everest summit-success report in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $EVEREST_PATH or the platform data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Report content file replacing the built-in text")]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
