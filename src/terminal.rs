//! Terminal management with RAII cleanup
//!
//! Embedding applications bring their own terminal loop; this module is the
//! small amount of glue the demo binary needs to run standalone. The
//! `TerminalManager` restores the terminal when dropped, and the panic hook
//! restores it before the panic message prints so the shell is never left
//! in raw mode.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

use crate::error::AlertError;

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call multiple times; all errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the panic
/// message prints. Call early in `main`, before `TerminalManager::new`.
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}

/// Owns the ratatui terminal and restores the host terminal on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalManager {
    /// Enter raw mode + alternate screen and build the terminal.
    pub fn new() -> Result<Self, AlertError> {
        enable_raw_mode().map_err(|source| AlertError::TerminalInit { source })?;
        let mut stdout = io::stdout();
        if let Err(source) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AlertError::TerminalInit { source });
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|source| AlertError::TerminalInit { source })?;
        Ok(Self { terminal })
    }

    /// Mutable access for drawing.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        leave_tui_mode(&mut io::stdout());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        // Escape sequences were written
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = std::panic::take_hook();
    }
}
