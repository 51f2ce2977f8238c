//! Terminal setup and teardown.
//!
//! [`TerminalGuard`] puts the terminal in raw mode on the alternate screen
//! and puts it back when dropped, including while unwinding. Call
//! [`install_panic_hook`] first so a panic message is printed on a usable
//! terminal rather than inside the alternate screen.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Owns the terminal for the lifetime of the UI.
///
/// Dereferences to [`AppTerminal`].
///
/// # Examples
///
/// ```no_run
/// use tasklet_tui::terminal::{self, TerminalGuard};
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// terminal::install_panic_hook();
/// let guard = TerminalGuard::new()?;
/// guard.restore()?;
/// # Ok(())
/// # }
/// ```
pub struct TerminalGuard {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Setup`] if any terminal operation fails. Raw
    /// mode is switched off again before returning the error.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::Setup)?;

        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                let _ = reset_terminal();
                Err(TerminalError::Setup(e))
            }
        }
    }

    /// Restores the terminal now, reporting failures.
    ///
    /// Dropping the guard restores the terminal too, but can only log
    /// failures.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Restore`] if any terminal operation fails.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.restored = true;
        reset_terminal().map_err(TerminalError::Restore)?;
        self.terminal.show_cursor().map_err(TerminalError::Restore)
    }
}

impl Deref for TerminalGuard {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored
            && let Err(e) = reset_terminal()
        {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn reset_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Installs a panic hook that restores the terminal before the original
/// hook prints the panic.
///
/// Call once at startup, before creating a [`TerminalGuard`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = reset_terminal();
        original_hook(panic_info);
    }));
}
