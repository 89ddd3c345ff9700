//! Status notices shown to the user.

use serde::Serialize;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeLevel {
    /// Returns the level as a string for rendering.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Single character marker for plain text output.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Success => '✔',
            Self::Error => '✖',
            Self::Warning => '!',
            Self::Info => 'i',
        }
    }
}

/// A status message produced by a session action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,

    /// Main message.
    pub text: String,

    /// Optional secondary line, e.g. a hint about what went wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Notice {
    /// Creates a notice without detail.
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            detail: None,
        }
    }

    /// Attaches a detail line.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
