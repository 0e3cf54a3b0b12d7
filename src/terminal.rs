//! Raw-mode terminal session that always hands the terminal back.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::panic;

/// Holds the terminal in raw mode on the alternate screen until dropped.
///
/// Dropping restores the terminal on every exit path: normal return, `?`
/// during setup, and unwinding out of the game loop.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enter raw mode and the alternate screen on `out`.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure is undone by the guard's Drop
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut self.out) {
            log::error!("failed to restore terminal: {}", err);
        }
    }
}

/// Leave raw mode and the alternate screen and show the cursor.
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

/// Restore the terminal before the panic message is printed, so it lands on
/// the normal screen instead of vanishing with the alternate one.
pub fn restore_on_panic() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout());
        hook(info);
    }));
}
