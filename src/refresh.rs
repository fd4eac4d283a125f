//! `<meta http-equiv="refresh">` extraction.
//!
//! The `content` attribute is parsed into a [`RefreshDirective`]. Accepted
//! shapes include `0; url=...`, `url=...` with no delay, `URL = '...'` and
//! `url="..."`. The delay is kept for callers but never affects the URL.

use std::str::FromStr;

use crate::dom::{DocumentTree, HtmlDocument};
use crate::error::{Error, Result};
use crate::patterns::META_REFRESH_CONTENT;
use crate::url_utils;

/// Parsed form of a meta refresh `content` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshDirective {
    /// Seconds before navigation, when the content starts with digits.
    pub delay_seconds: Option<u32>,
    /// Unquoted, trimmed URL token. May be relative.
    pub url: String,
}

impl FromStr for RefreshDirective {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let unparsable = || Error::UnparsableRefreshContent(content.to_string());

        let caps = META_REFRESH_CONTENT.captures(content).ok_or_else(unparsable)?;
        let token = caps.name("url").map_or("", |m| m.as_str());
        let url = unquote(token);
        if url.is_empty() {
            return Err(unparsable());
        }

        Ok(Self {
            delay_seconds: caps.name("delay").and_then(|m| m.as_str().parse().ok()),
            url: url.to_string(),
        })
    }
}

/// Strip a leading quote and everything from its matching close quote on.
/// An unterminated quote runs to the end of the token.
fn unquote(token: &str) -> &str {
    let token = token.trim();
    match token.chars().next() {
        Some(quote @ ('\'' | '"')) => {
            let rest = &token[1..];
            rest.find(quote).map_or(rest, |end| &rest[..end]).trim()
        }
        _ => token,
    }
}

/// Find the meta refresh target declared by `tree`, resolved against `base_url`.
///
/// Only the first `<meta>` whose `http-equiv` is `refresh` (any case) is
/// considered.
#[must_use]
pub fn meta_refresh_url_from_tree<T: DocumentTree>(
    tree: &T,
    base_url: Option<&str>,
) -> Option<String> {
    let metas = tree.elements_by_tag("meta");
    let Some(meta) = metas.iter().find(|meta| {
        tree.attribute(meta, "http-equiv")
            .is_some_and(|equiv| equiv.trim().eq_ignore_ascii_case("refresh"))
    }) else {
        tracing::trace!("no <meta http-equiv=\"refresh\"> in document");
        return None;
    };

    let Some(content) = tree.attribute(meta, "content") else {
        tracing::debug!("<meta http-equiv=\"refresh\"> without content");
        return None;
    };

    let directive = match content.parse::<RefreshDirective>() {
        Ok(directive) => directive,
        Err(err) => {
            tracing::debug!(%err, "ignoring meta refresh");
            return None;
        }
    };

    url_utils::absolutize(&directive.url, base_url)
}

/// Parse `html` and extract its meta refresh URL.
#[must_use]
pub fn meta_refresh_url(html: &str, base_url: Option<&str>) -> Option<String> {
    meta_refresh_url_from_tree(&HtmlDocument::parse(html), base_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(content: &str) -> RefreshDirective {
        content
            .parse()
            .unwrap_or_else(|err| panic!("{content:?} should parse: {err}"))
    }

    #[test]
    fn parses_delay_and_url() {
        assert_eq!(
            directive("0; URL=http://example.com/"),
            RefreshDirective {
                delay_seconds: Some(0),
                url: "http://example.com/".to_string(),
            }
        );
        assert_eq!(directive("  15 ;url = page.html ").delay_seconds, Some(15));
        assert_eq!(directive("  15 ;url = page.html ").url, "page.html");
    }

    #[test]
    fn delay_is_optional() {
        let parsed = directive("url=http://example.com/");
        assert_eq!(parsed.delay_seconds, None);
        assert_eq!(parsed.url, "http://example.com/");
    }

    #[test]
    fn fractional_delay_and_comma_separator() {
        assert_eq!(directive("1.5, url=/next").delay_seconds, Some(1));
        assert_eq!(directive("1.5, url=/next").url, "/next");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(directive("0;Url=/a").url, "/a");
        assert_eq!(directive("0;URL=/a").url, "/a");
    }

    #[test]
    fn strips_either_quote_style() {
        assert_eq!(directive("url='http://example.com/'").url, "http://example.com/");
        assert_eq!(directive("url=\"http://example.com/\"").url, "http://example.com/");
        assert_eq!(directive("0; url=' spaced/ '").url, "spaced/");
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        assert_eq!(directive("0; url='http://example.com/").url, "http://example.com/");
    }

    #[test]
    fn content_without_url_is_unparsable() {
        for content in ["5", "", "text/html; charset=UTF-8", "0; url=", "0; url=''"] {
            assert_eq!(
                content.parse::<RefreshDirective>(),
                Err(Error::UnparsableRefreshContent(content.to_string())),
                "{content:?}"
            );
        }
    }

    #[test]
    fn first_refresh_meta_wins() {
        let html = r#"
            <meta http-equiv="refresh" content="5">
            <meta http-equiv="refresh" content="0; url=http://example.com/">
        "#;
        assert_eq!(meta_refresh_url(html, Some("http://example.com/")), None);
    }

    #[test]
    fn refresh_without_content_is_absent() {
        let html = r#"<meta http-equiv="refresh">"#;
        assert_eq!(meta_refresh_url(html, Some("http://example.com/")), None);
    }

    #[test]
    fn http_equiv_value_is_case_insensitive() {
        let html = r#"<meta http-equiv="REFRESH" content="0; url=/x">"#;
        assert_eq!(
            meta_refresh_url(html, Some("http://example.com/a/")),
            Some("http://example.com/x".to_string())
        );
    }
}
