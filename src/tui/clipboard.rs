//! Copy to the system clipboard through the terminal (OSC 52).
//!
//! Works over SSH and without a display server, as long as the terminal
//! honors OSC 52. Terminals that don't simply ignore the sequence.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// The OSC 52 escape sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}
