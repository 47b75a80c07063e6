//! Clipboard access through the OSC 52 terminal escape
//!
//! The terminal emulator owns the system clipboard, so this works over SSH
//! and without a display server. Terminals that ignore OSC 52 silently drop
//! the sequence.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Put `text` on the clipboard
pub fn copy(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }
}
