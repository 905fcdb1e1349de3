//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen (optionally with mouse capture).
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the UI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores terminal state when dropped.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Switch the terminal into UI mode and return the guard that undoes it.
    pub fn enter(no_mouse: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { no_mouse };
        let mut stdout = std::io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: nothing useful can be done with them while unwinding.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
