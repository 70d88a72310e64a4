//! Terminal driver for the interactive viewer.
//!
//! Sets up raw mode and the alternate screen, then feeds key presses to the
//! [`DisplayShell`] until it asks to quit.

mod shell;

pub use shell::{DisplayShell, Overlay};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use everest_core::PreferenceStore;
use ratatui::{Terminal, backend::CrosstermBackend};

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn run<S: PreferenceStore>(self, mut shell: DisplayShell<S>) -> Result<()> {
        enable_raw_mode()?;
        let result = restoring(|| self.run_raw(&mut shell), restore_terminal);
        tracing::info!(revision = shell.store().revision(), "viewer closed");
        result
    }

    /// Everything after raw mode is on. Any early return still goes through
    /// [`restore_terminal`].
    fn run_raw<S: PreferenceStore>(&self, shell: &mut DisplayShell<S>) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        ctrlc::set_handler(|| {
            let _ = restore_terminal();
            std::process::exit(0);
        })?;

        tracing::info!(page = shell.store().page_index(), "viewer started");
        self.event_loop(&mut terminal, shell)
    }

    fn event_loop<S: PreferenceStore>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        shell: &mut DisplayShell<S>,
    ) -> Result<()> {
        while !shell.should_quit() {
            terminal.draw(|f| shell.draw(f))?;

            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                shell.handle_key(key);
            }
        }
        Ok(())
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Run `body`, then `restore` whatever the outcome. The body's error wins
/// over a restore error.
fn restoring<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}
