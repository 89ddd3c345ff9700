//! Pre-compiled link patterns.
//!
//! Both file patterns are anchored and case-sensitive. Capture groups are
//! positional and read back by [`super::parse`].

use regex::Regex;
use std::sync::LazyLock;

/// `https://github.com/{owner}/{repository}/blob/{branch}/{path}`
///
/// The owner becomes the Pages host label, so it may not contain `.` either.
pub(super) static REPOSITORY_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/([^./]+)/([^/]+)/blob/([^/]+)/([^/].*)$").unwrap()
});

/// `https://{owner}.github.io/{repository}/{path}`
///
/// The owner is a host label, so it may contain neither `.` nor `/`.
pub(super) static PUBLISHED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://([^./]+)\.github\.io/([^/]+)/([^/].*)$").unwrap()
});

/// Repository link prefix, with or without a file path.
pub(super) static REPOSITORY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://github\.com/([^./]+)/([^/]+)").unwrap());

/// Pages link prefix, with or without a file path.
pub(super) static PUBLISHED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://([^./]+)\.github\.io/([^/]+)").unwrap());
