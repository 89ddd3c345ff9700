//! The two link shapes understood by the converter.

use serde::Serialize;
use std::fmt;

/// Shape of a recognised GitHub link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// A file view inside a repository, e.g. `https://github.com/{owner}/{repo}/blob/{branch}/{path}`.
    Repository,

    /// A file served by GitHub Pages, e.g. `https://{owner}.github.io/{repo}/{path}`.
    PublishedSite,
}

impl LinkKind {
    /// Returns the kind a link of this kind converts into.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Repository => Self::PublishedSite,
            Self::PublishedSite => Self::Repository,
        }
    }

    /// Returns the kind as a string for logs and machine-readable output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repository => "repository",
            Self::PublishedSite => "published_site",
        }
    }

    /// Human readable name used in status messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Repository => "GitHub repository",
            Self::PublishedSite => "GitHub Pages",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_swaps_kinds() {
        assert_eq!(LinkKind::Repository.opposite(), LinkKind::PublishedSite);
        assert_eq!(LinkKind::PublishedSite.opposite(), LinkKind::Repository);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&LinkKind::PublishedSite).unwrap();
        assert_eq!(json, "\"published_site\"");
        assert_eq!(LinkKind::PublishedSite.to_string(), "published_site");
    }
}
