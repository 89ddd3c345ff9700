//! Session action error types.

use thiserror::Error;

/// Errors reported by the collaborators a session delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Writing to a clipboard failed.
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    /// Opening a link failed.
    #[error("Failed to open link: {0}")]
    Open(String),
}
