//! Terminal ownership with RAII restore.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! with mouse capture, and puts it back when dropped. The panic hook from
//! [`setup_panic_hook`] covers the paths where drop does not run.
//!
//! # Example
//!
//! ```no_run
//! use devsim::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crate::error::DevsimResult;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal once, on drop or on demand.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Owns the ratatui terminal for the lifetime of the dashboard.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, enable mouse capture, and
    /// clear the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails. Whatever was already
    /// enabled is rolled back.
    pub fn new() -> DevsimResult<Self> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard { restored: false };

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            guard.restore();
            return Err(e.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) {
        self.guard.restore();
    }
}
