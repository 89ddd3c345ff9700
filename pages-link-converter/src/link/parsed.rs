//! Structured fields of a recognised link.

use super::LinkKind;
use serde::Serialize;

/// The fields extracted from a single recognised link.
///
/// Built fresh for each conversion. `owner`, `repository` and `path` are
/// always non-empty; `owner`, `repository` and `branch` never contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLink {
    /// Shape the fields were extracted from.
    pub kind: LinkKind,

    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repository: String,

    /// Branch name. Only repository links carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Path of the file inside the repository or site, without a leading `/`.
    pub path: String,
}

impl ParsedLink {
    /// Returns a copy of this link with the branch set explicitly.
    ///
    /// Useful when the caller knows the real branch of a Pages site, since
    /// the Pages link itself never encodes one.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }
}
