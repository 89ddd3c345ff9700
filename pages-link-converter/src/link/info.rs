//! Loose repository identification for links that are not file links.

use super::patterns::{PUBLISHED_PREFIX, REPOSITORY_PREFIX};
use super::LinkKind;
use serde::Serialize;
use url::Url;

/// Owner and repository named by a link, regardless of whether it points at a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    /// Which host shape the link uses.
    pub kind: LinkKind,

    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repository: String,
}

/// Extracts the owner and repository from the start of a GitHub or Pages link.
///
/// Unlike [`super::classify`] this only matches a prefix, so links to a
/// repository root or to a tree view are accepted too.
#[must_use]
pub fn extract_repo_info(url: &str) -> Option<RepoInfo> {
    let candidates = [
        (LinkKind::Repository, &*REPOSITORY_PREFIX),
        (LinkKind::PublishedSite, &*PUBLISHED_PREFIX),
    ];

    candidates.into_iter().find_map(|(kind, pattern)| {
        let caps = pattern.captures(url)?;
        Some(RepoInfo {
            kind,
            owner: caps[1].to_string(),
            repository: caps[2].to_string(),
        })
    })
}

/// Returns true if `input` is a syntactically valid absolute URL.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
