//! `<link rel="canonical">` extraction.

use crate::dom::{DocumentTree, HtmlDocument};
use crate::url_utils;

/// Find the canonical URL declared by `tree`, resolved against `base_url`.
///
/// The first `<link>` whose `rel` is `canonical` (any case) wins; if it has
/// no `href` the result is `None` even when later links would match.
#[must_use]
pub fn canonical_url_from_tree<T: DocumentTree>(
    tree: &T,
    base_url: Option<&str>,
) -> Option<String> {
    let links = tree.elements_by_tag("link");
    let Some(link) = links.iter().find(|link| {
        tree.attribute(link, "rel")
            .is_some_and(|rel| rel.trim().eq_ignore_ascii_case("canonical"))
    }) else {
        tracing::trace!("no <link rel=\"canonical\"> in document");
        return None;
    };

    let Some(href) = tree.attribute(link, "href") else {
        tracing::debug!("<link rel=\"canonical\"> without href");
        return None;
    };

    url_utils::absolutize(&href, base_url)
}

/// Parse `html` and extract its canonical URL.
#[must_use]
pub fn canonical_url(html: &str, base_url: Option<&str>) -> Option<String> {
    canonical_url_from_tree(&HtmlDocument::parse(html), base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_canonical_link_wins() {
        let html = r#"
            <link rel="canonical" href="http://example.com/one">
            <link rel="canonical" href="http://example.com/two">
        "#;
        assert_eq!(canonical_url(html, None), Some("http://example.com/one".to_string()));
    }

    #[test]
    fn rel_value_is_case_insensitive() {
        let html = r#"<link rel=" CANONICAL " href="http://example.com/">"#;
        assert_eq!(canonical_url(html, None), Some("http://example.com/".to_string()));
    }

    #[test]
    fn other_rel_values_are_ignored() {
        let html = r#"
            <link rel="alternate" href="http://example.com/amp">
            <link rel="stylesheet" href="a.css">
        "#;
        assert_eq!(canonical_url(html, Some("http://example.com/")), None);
    }

    #[test]
    fn canonical_without_href_is_absent() {
        let html = r#"<link rel="canonical"><link rel="canonical" href="http://example.com/">"#;
        assert_eq!(canonical_url(html, Some("http://example.com/")), None);
    }

    #[test]
    fn empty_href_is_absent() {
        let html = r#"<link rel="canonical" href="">"#;
        assert_eq!(canonical_url(html, Some("http://example.com/")), None);
    }

    #[test]
    fn canonical_in_body_is_found() {
        let html = r#"<body><p>text</p><link rel="canonical" href="/moved"></body>"#;
        assert_eq!(
            canonical_url(html, Some("https://example.com/a/b")),
            Some("https://example.com/moved".to_string())
        );
    }
}
