use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw (no echo, no line buffering) terminal mode, restored on drop.
///
/// Hold one for the whole command loop so keys typed while a command runs are
/// never echoed. Output written meanwhile needs `\r\n` line endings.
pub struct RawMode(());

impl RawMode {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Wait up to `timeout` for one key press. Releases and repeats are skipped.
pub fn next_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// `line` terminated for a terminal in raw mode, where `\n` alone does not
/// return the cursor to column 0.
pub fn raw_line(line: &str) -> String {
    format!("{line}\r\n")
}
