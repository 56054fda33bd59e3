//! "Press any key" pauses between menu actions.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

/// Waits for the user between menu actions.
pub trait Pause {
    /// Block until the user is ready to continue.
    fn pause(&mut self, output: &mut dyn Write) -> io::Result<()>;
}

/// Waits for a single key press using the terminal's raw mode.
///
/// Returns immediately when raw mode is unavailable.
#[derive(Debug, Clone)]
pub struct KeyPause {
    message: String,
}

impl Default for KeyPause {
    fn default() -> Self {
        Self::new("Press any key to continue...")
    }
}

impl KeyPause {
    /// Create a pause that shows `message` while waiting
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Pause for KeyPause {
    fn pause(&mut self, output: &mut dyn Write) -> io::Result<()> {
        write!(output, "{}", self.message)?;
        output.flush()?;

        if terminal::enable_raw_mode().is_err() {
            return writeln!(output);
        }

        let result = wait_for_key();
        terminal::disable_raw_mode()?;
        writeln!(output)?;
        result
    }
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Never waits. Used when input is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&mut self, _output: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
