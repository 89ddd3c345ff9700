//! Clipboard and browser access for the session.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pages_link_converter::{ActionError, Clipboard, LinkOpener};
use std::io::{IsTerminal, Write};
use tracing::debug;

/// The system clipboard.
///
/// The handle is created on first use and kept for the lifetime of the
/// process, since on X11 the copied text disappears with it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => {
                arboard::Clipboard::new().map_err(|e| ActionError::Clipboard(e.to_string()))?
            }
        };
        let clipboard = self.inner.insert(clipboard);

        clipboard
            .set_text(text)
            .map_err(|e| ActionError::Clipboard(e.to_string()))
    }
}

/// Copies through the terminal with an OSC 52 escape sequence written to stderr.
///
/// Works over SSH and inside most terminal multiplexers, where the system
/// clipboard is usually unreachable.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ActionError> {
        let mut stderr = std::io::stderr();
        if !stderr.is_terminal() {
            return Err(ActionError::Clipboard(
                "stderr is not a terminal".to_string(),
            ));
        }

        debug!("Copying through OSC 52");
        write!(stderr, "\x1b]52;c;{}\x07", STANDARD.encode(text))
            .and_then(|()| stderr.flush())
            .map_err(|e| ActionError::Clipboard(e.to_string()))
    }
}

/// Opens links in the default browser.
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), ActionError> {
        opener::open_browser(url).map_err(|e| ActionError::Open(e.to_string()))
    }
}
