use std::io::{IsTerminal, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use docsite_icons::{Clipboard, ClipboardError};

/// Sets the system clipboard through the terminal with an OSC 52 escape
/// sequence. Only works when stdout is a terminal that honours OSC 52.
pub(crate) struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        write!(stdout, "\x1b]52;c;{}\x07", BASE64.encode(text)).map_err(ClipboardError::Write)?;
        stdout.flush().map_err(ClipboardError::Write)
    }
}
