//! Reassembly of parsed links into either URL shape.

use crate::link::{LinkKind, ParsedLink};

/// Branch assumed when rendering a repository link from a Pages link.
///
/// Pages links do not encode a branch, so this is a guess: repositories
/// whose default branch is not `main` get a wrong link.
pub const DEFAULT_BRANCH: &str = "main";

/// Renders `link` as a URL of the `target` kind.
///
/// Rendering into the link's own kind reproduces the original URL as long
/// as the fields are unchanged. No check is made that the target exists.
#[must_use]
pub fn render(link: &ParsedLink, target: LinkKind) -> String {
    match target {
        LinkKind::PublishedSite => format!(
            "https://{}.github.io/{}/{}",
            link.owner, link.repository, link.path
        ),
        LinkKind::Repository => format!(
            "https://github.com/{}/{}/blob/{}/{}",
            link.owner,
            link.repository,
            link.branch.as_deref().unwrap_or(DEFAULT_BRANCH),
            link.path
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::parse;

    fn repository_link(branch: &str) -> ParsedLink {
        ParsedLink {
            kind: LinkKind::Repository,
            owner: "alice".to_string(),
            repository: "site".to_string(),
            branch: Some(branch.to_string()),
            path: "docs/index.html".to_string(),
        }
    }

    #[test]
    fn repository_to_pages_drops_branch() {
        let url = render(&repository_link("gh-pages"), LinkKind::PublishedSite);
        assert_eq!(url, "https://alice.github.io/site/docs/index.html");
    }

    #[test]
    fn pages_to_repository_defaults_to_main() {
        let link = parse(
            "https://alice.github.io/site/docs/index.html",
            LinkKind::PublishedSite,
        )
        .unwrap();

        let url = render(&link, LinkKind::Repository);
        assert_eq!(url, "https://github.com/alice/site/blob/main/docs/index.html");
    }

    #[test]
    fn explicit_branch_is_used_for_repository_links() {
        let link = parse("https://alice.github.io/site/a.html", LinkKind::PublishedSite)
            .unwrap()
            .with_branch("develop");

        let url = render(&link, LinkKind::Repository);
        assert_eq!(url, "https://github.com/alice/site/blob/develop/a.html");
    }

    #[test]
    fn rendering_into_same_kind_is_identity() {
        let repo = "https://github.com/alice/site/blob/gh-pages/docs/index.html";
        let pages = "https://alice.github.io/site/docs/index.html";

        let link = parse(repo, LinkKind::Repository).unwrap();
        assert_eq!(render(&link, LinkKind::Repository), repo);

        let link = parse(pages, LinkKind::PublishedSite).unwrap();
        assert_eq!(render(&link, LinkKind::PublishedSite), pages);
    }

    #[test]
    fn round_trip_forces_main_branch() {
        let inputs = [
            ("octo", "handbook", "release", "guides/setup/intro.md"),
            ("bob", "bob.github.io", "trunk", "a/b/c/d.html"),
            ("carol-x", "proj_1", "v1.2", "assets/img/logo.png"),
        ];

        for (owner, repository, branch, path) in inputs {
            let original = format!("https://github.com/{owner}/{repository}/blob/{branch}/{path}");
            let pages = render(
                &parse(&original, LinkKind::Repository).unwrap(),
                LinkKind::PublishedSite,
            );
            let back = parse(&pages, LinkKind::PublishedSite).unwrap();

            assert_eq!(back.owner, owner);
            assert_eq!(back.repository, repository);
            assert_eq!(back.path, path);
            assert_eq!(
                render(&back, LinkKind::Repository),
                format!("https://github.com/{owner}/{repository}/blob/main/{path}")
            );
        }
    }
}
