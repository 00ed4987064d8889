use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Switch the terminal into raw alternate-screen mode for a game
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

pub fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
