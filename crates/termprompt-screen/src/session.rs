//! Terminal mode guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, is_raw_mode_enabled, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use termprompt_core::{Error, Result};
use tracing::debug;

/// Puts the terminal into raw mode on the alternate screen and restores it
/// when dropped.
///
/// Each flag records whether this session changed the corresponding terminal
/// state, so a session started inside an already-raw terminal leaves raw mode
/// alone on teardown. Prefer [`TerminalSession::end`] for explicit teardown
/// with error reporting; [`Drop`] restores best-effort.
pub struct TerminalSession {
    raw_mode: bool,
    alternate: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    /// Switches the terminal into widget mode.
    pub fn begin() -> Result<Self> {
        let mut session = Self {
            raw_mode: false,
            alternate: false,
            cursor_hidden: false,
        };

        if !is_raw_mode_enabled().unwrap_or(false) {
            enable_raw_mode().map_err(Error::Io)?;
            session.raw_mode = true;
        }

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(Error::Io)?;
        session.alternate = true;
        execute!(stdout, Hide).map_err(Error::Io)?;
        session.cursor_hidden = true;
        stdout.flush().map_err(Error::Io)?;

        debug!(raw_mode = session.raw_mode, "terminal session started");
        Ok(session)
    }

    /// Restores the terminal explicitly, reporting any failure.
    pub fn end(mut self) -> Result<()> {
        self.cleanup()
    }

    fn cleanup(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        if self.cursor_hidden {
            let _ = execute!(stdout, Show);
            self.cursor_hidden = false;
        }
        if self.alternate {
            let _ = execute!(stdout, LeaveAlternateScreen);
            self.alternate = false;
        }
        if self.raw_mode {
            disable_raw_mode().map_err(Error::Io)?;
            self.raw_mode = false;
        }
        debug!("terminal session ended");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
