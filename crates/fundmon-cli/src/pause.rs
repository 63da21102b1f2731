//! Console keypress handling for the final pause.

use std::io;

use console::Term;
use fundmon_core::Pause;
use fundmon_core::messages::PRESS_ANY_KEY;

/// Waits for a single keystroke on the attached terminal.
///
/// When stdout is not a terminal (piped, redirected, run from a scheduler)
/// there is nobody to press a key, so the wait is skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPause;

impl TerminalPause {
    pub fn is_interactive() -> bool {
        Term::stdout().is_term()
    }
}

impl Pause for TerminalPause {
    fn wait_for_key(&self) -> io::Result<()> {
        let term = Term::stdout();
        if !term.is_term() {
            return Ok(());
        }

        term.write_line(PRESS_ANY_KEY)?;
        term.read_key()?;
        Ok(())
    }
}
