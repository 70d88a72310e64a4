// NOTE: everest viewer layout
//
// Why a separate core crate?
// - Navigation, tab sequencing, search and theme persistence are plain state
//   machines; keeping them free of terminal types makes them testable alone
// - The CLI only adapts them to two surfaces: one-shot console output and the
//   interactive TUI
//
// Why remount on render key change (not on every navigation)?
// - A page seeds its tab from the inbound hint exactly once per mount
// - Re-navigating to the same page and hint keeps the in-page tab the reader
//   picked; a different hint is a different page instance

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ThemeCommand};
pub use commands::run;
