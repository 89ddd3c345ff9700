//! Interactive front end state.
//!
//! A [`Session`] owns everything a front end displays: the current input,
//! the last converted link and the current status notice. It delegates the
//! actual conversion to [`convert()`] and platform work to the
//! [`Clipboard`] and [`LinkOpener`] traits.

mod collaborators;
mod error;
mod notice;

pub use collaborators::{Clipboard, LinkOpener};
pub use error::ActionError;
pub use notice::{Notice, NoticeLevel};

use crate::convert::{convert, Conversion, ConversionError};
use crate::link::{extract_repo_info, is_valid_url, LinkKind};
use tracing::{debug, warn};

/// State of one interactive conversion session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    result: Option<Conversion>,
    notice: Option<Notice>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the last successful conversion.
    pub fn result(&self) -> Option<&Conversion> {
        self.result.as_ref()
    }

    /// Returns the last converted link.
    pub fn output(&self) -> Option<&str> {
        self.result.as_ref().map(|c| c.output.as_str())
    }

    /// Returns the current notice.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Replaces the input text. Editing the input dismisses the current notice.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.notice = None;
    }

    /// Converts the current input.
    ///
    /// On success the result and a notice replace the previous ones. The
    /// notice is a warning when the branch had to be assumed.
    /// On failure an error notice is shown and the previous result is kept.
    ///
    /// # Errors
    ///
    /// Returns the [`ConversionError`] describing why the input was rejected.
    pub fn submit(&mut self) -> Result<&Conversion, ConversionError> {
        match convert(&self.input) {
            Ok(conversion) => {
                let notice = match &conversion.assumed_branch {
                    Some(branch) => Notice::new(NoticeLevel::Warning, conversion.message.clone())
                        .with_detail(format!(
                            "Assumed branch '{branch}'. Adjust the link if the repository uses another default branch."
                        )),
                    None => Notice::new(NoticeLevel::Success, conversion.message.clone()),
                };
                self.notice = Some(notice);
                Ok(&*self.result.insert(conversion))
            }
            Err(e) => {
                debug!(error = %e, "Conversion rejected");
                let mut notice = Notice::new(NoticeLevel::Error, e.to_string());
                if e == ConversionError::UnrecognizedFormat {
                    if let Some(hint) = unrecognized_hint(self.input.trim()) {
                        notice = notice.with_detail(hint);
                    }
                }
                self.notice = Some(notice);
                Err(e)
            }
        }
    }

    /// Resets input, result and notice.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Removes the current notice.
    pub fn dismiss(&mut self) {
        self.notice = None;
    }

    /// Copies the last converted link.
    ///
    /// Tries `primary` first and `fallback` if that fails. Returns whether
    /// the link was copied.
    pub fn copy_result(
        &mut self,
        primary: &mut dyn Clipboard,
        fallback: Option<&mut dyn Clipboard>,
    ) -> bool {
        let Some(text) = self.output().map(str::to_owned) else {
            self.notice = Some(Notice::new(NoticeLevel::Error, "No link to copy"));
            return false;
        };

        let copied = match primary.set_text(&text) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Clipboard unavailable, trying fallback");
                match fallback.map(|clipboard| clipboard.set_text(&text)) {
                    Some(Ok(())) => true,
                    Some(Err(e)) => {
                        warn!(error = %e, "Fallback clipboard failed");
                        false
                    }
                    None => false,
                }
            }
        };

        self.notice = Some(if copied {
            Notice::new(NoticeLevel::Success, "Link copied to clipboard!")
        } else {
            Notice::new(
                NoticeLevel::Error,
                "Failed to copy link. Please copy manually.",
            )
        });
        copied
    }

    /// Opens the last converted link. Returns whether the opener succeeded.
    pub fn open_result(&mut self, opener: &dyn LinkOpener) -> bool {
        let Some(url) = self.output().map(str::to_owned) else {
            self.notice = Some(Notice::new(NoticeLevel::Error, "No link to open"));
            return false;
        };

        match opener.open(&url) {
            Ok(()) => {
                self.notice = Some(Notice::new(NoticeLevel::Info, "Opening link in browser..."));
                true
            }
            Err(e) => {
                warn!(error = %e, url = %url, "Failed to open link");
                self.notice = Some(Notice::new(NoticeLevel::Error, e.to_string()));
                false
            }
        }
    }
}

/// Explains why a link that looked plausible was not recognised.
fn unrecognized_hint(input: &str) -> Option<String> {
    if let Some(info) = extract_repo_info(input) {
        let hint = match info.kind {
            LinkKind::Repository => format!(
                "{}/{} is a repository link but not a file link. Expected https://github.com/{}/{}/blob/<branch>/<path>",
                info.owner, info.repository, info.owner, info.repository
            ),
            LinkKind::PublishedSite => format!(
                "{}.github.io/{} is a GitHub Pages link but not a file link. Expected https://{}.github.io/{}/<path>",
                info.owner, info.repository, info.owner, info.repository
            ),
        };
        return Some(hint);
    }

    if is_valid_url(input) {
        return Some("Only github.com and <owner>.github.io links over https are supported".to_string());
    }

    None
}
