use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

pub type LoginTerminal = Terminal<CrosstermBackend<Stdout>>;

static RESTORE_HOOK: Once = Once::new();

/// Runs `session` on the alternate screen in raw mode. The terminal is
/// restored when `session` returns, fails, or panics.
pub fn with_terminal<T>(session: impl FnOnce(&mut LoginTerminal) -> Result<T>) -> Result<T> {
    RESTORE_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });

    enable_raw_mode().context("failed to enable raw mode")?;
    debug!("entering login screen");
    let outcome = execute!(io::stdout(), EnterAlternateScreen, Hide)
        .context("failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("failed to initialize terminal")
        })
        .and_then(|mut terminal| session(&mut terminal));
    restore();
    debug!("login screen closed");
    outcome
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
