//! Copy and open actions wired to the platform.

use crate::platform::{BrowserOpener, SystemClipboard, TerminalClipboard};
use pages_link_converter::{Clipboard, Session, Settings};

/// Platform collaborators plus the automatic actions requested by the user.
pub struct Actions {
    auto_copy: bool,
    auto_open: bool,
    terminal_fallback: bool,
    clipboard: SystemClipboard,
    fallback: TerminalClipboard,
    opener: BrowserOpener,
}

impl Actions {
    /// Creates the actions for the given settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            auto_copy: settings.auto_copy,
            auto_open: settings.auto_open,
            terminal_fallback: settings.terminal_fallback,
            clipboard: SystemClipboard::default(),
            fallback: TerminalClipboard,
            opener: BrowserOpener,
        }
    }

    /// Whether every converted link is copied.
    pub fn auto_copy(&self) -> bool {
        self.auto_copy
    }

    /// Whether every converted link is opened.
    pub fn auto_open(&self) -> bool {
        self.auto_open
    }

    /// Copies the session's last result.
    pub fn copy(&mut self, session: &mut Session) -> bool {
        let fallback: Option<&mut dyn Clipboard> = if self.terminal_fallback {
            Some(&mut self.fallback)
        } else {
            None
        };
        session.copy_result(&mut self.clipboard, fallback)
    }

    /// Opens the session's last result.
    pub fn open(&self, session: &mut Session) -> bool {
        session.open_result(&self.opener)
    }
}
