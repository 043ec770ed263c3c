//! Raw mode RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that ensures raw mode is disabled (and the cursor shown) when dropped.
pub struct RawModeGuard {
    enabled: bool,
    cursor_hidden: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            enabled: true,
            cursor_hidden: false,
        })
    }

    /// Raw mode with the cursor hidden, for single-key waits.
    pub fn hidden() -> io::Result<Self> {
        let mut guard = Self::new()?;
        execute!(io::stdout(), Hide)?;
        guard.cursor_hidden = true;
        Ok(guard)
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(io::stdout(), Show);
            self.cursor_hidden = false;
        }
        if self.enabled {
            let _ = disable_raw_mode();
            let _ = io::stdout().flush();
            self.enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
