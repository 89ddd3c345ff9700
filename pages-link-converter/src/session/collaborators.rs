//! Seams to the platform the session runs on.

use super::ActionError;

/// Destination for copied links.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ActionError>;
}

/// Opens links in a browser or similar viewer.
pub trait LinkOpener {
    /// Opens `url`.
    fn open(&self, url: &str) -> Result<(), ActionError>;
}
