//! Logging setup on top of `tracing-subscriber`.
//!
//! One-shot commands log to stderr. The viewer owns the terminal, so it logs
//! to a file in the data directory instead. `RUST_LOG` overrides the level
//! given on the command line.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::args::LogLevel;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub with_ansi: bool,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl LogConfig {
    pub fn stderr(level: LogLevel) -> Self {
        Self {
            level,
            with_ansi: true,
            log_file: None,
        }
    }

    pub fn file(level: LogLevel, path: PathBuf) -> Self {
        Self {
            level,
            with_ansi: false,
            log_file: Some(path),
        }
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            init_logging_with_writer(config, Mutex::new(file))
        }
        None => init_logging_with_writer(config, io::stderr),
    }
}

pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()))
}
