//! Recognition and field extraction for GitHub file links.
//!
//! Two shapes are understood:
//! ```text
//! https://github.com/{owner}/{repository}/blob/{branch}/{path}   (Repository)
//! https://{owner}.github.io/{repository}/{path}                  (PublishedSite)
//! ```

mod error;
mod info;
mod kind;
mod parsed;
mod patterns;

pub use error::ParseError;
pub use info::{extract_repo_info, is_valid_url, RepoInfo};
pub use kind::LinkKind;
pub use parsed::ParsedLink;

use patterns::{PUBLISHED_FILE, REPOSITORY_FILE};
use regex::Regex;
use tracing::debug;

/// Returns the compiled pattern for a link kind.
fn pattern_for(kind: LinkKind) -> &'static Regex {
    match kind {
        LinkKind::Repository => &*REPOSITORY_FILE,
        LinkKind::PublishedSite => &*PUBLISHED_FILE,
    }
}

/// Determines which link shape `input` has.
///
/// The whole string must match; there is no fuzzy or partial matching.
/// Returns `None` when neither shape matches.
#[must_use]
pub fn classify(input: &str) -> Option<LinkKind> {
    let kind = [LinkKind::Repository, LinkKind::PublishedSite]
        .into_iter()
        .find(|kind| pattern_for(*kind).is_match(input));

    debug!(input, kind = kind.map(LinkKind::as_str), "Classified link");
    kind
}

/// Extracts the fields of `input` as a link of the given kind.
///
/// Should only be called with the kind [`classify`] returned for the same
/// string.
///
/// # Errors
///
/// Returns [`ParseError::PatternMismatch`] if `input` does not have the shape of `kind`.
pub fn parse(input: &str, kind: LinkKind) -> Result<ParsedLink, ParseError> {
    let caps = pattern_for(kind)
        .captures(input)
        .ok_or_else(|| ParseError::PatternMismatch {
            kind,
            input: input.to_string(),
        })?;

    let link = match kind {
        LinkKind::Repository => ParsedLink {
            kind,
            owner: caps[1].to_string(),
            repository: caps[2].to_string(),
            branch: Some(caps[3].to_string()),
            path: caps[4].to_string(),
        },
        LinkKind::PublishedSite => ParsedLink {
            kind,
            owner: caps[1].to_string(),
            repository: caps[2].to_string(),
            branch: None,
            path: caps[3].to_string(),
        },
    };

    Ok(link)
}
