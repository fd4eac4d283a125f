//! # rs-htmlnav
//!
//! Navigation metadata and readable text from raw HTML.
//!
//! A content-ingestion pipeline needs two things from a fetched page: the
//! URL the page really lives at, and its text in a form fit for sentence
//! and language analysis. This crate provides both:
//!
//! - [`canonical_url`] follows `<link rel="canonical">`
//! - [`meta_refresh_url`] follows `<meta http-equiv="refresh">`
//! - [`strip_html`] turns markup into period-delimited sentences
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_htmlnav::{canonical_url, meta_refresh_url, strip_html};
//!
//! let html = r#"<html><head>
//!     <link rel="canonical" href="second/third/">
//!     <meta http-equiv="refresh" content="0; url='/moved/'">
//! </head><body><h1>Hello</h1><p>World</p></body></html>"#;
//!
//! assert_eq!(
//!     canonical_url(html, Some("http://example.com/first/")).as_deref(),
//!     Some("http://example.com/first/second/third/")
//! );
//! assert_eq!(
//!     meta_refresh_url(html, Some("http://example.com/first/")).as_deref(),
//!     Some("http://example.com/moved/")
//! );
//! assert_eq!(strip_html(html), "Hello. World.");
//! ```
//!
//! All operations are pure and infallible: markup that cannot be
//! interpreted yields `None` or best-effort text, never an error. The
//! reasons are reported at `debug` level through `tracing`.

mod canonical;
mod error;
mod options;
mod patterns;
mod refresh;
mod strip;
mod tags;

/// DOM adapter: the `DocumentTree` capability and its `dom_query` implementation.
pub mod dom;

/// URL validation and reference resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use canonical::{canonical_url, canonical_url_from_tree};
pub use dom::{DocumentTree, HtmlDocument, NodeVisitor};
pub use error::{Error, Result};
pub use options::StripOptions;
pub use refresh::{meta_refresh_url, meta_refresh_url_from_tree, RefreshDirective};
pub use strip::{strip_html_bytes, strip_html_with_options, strip_tree};

/// Converts HTML to plain text using default options (title dropped).
///
/// # Example
///
/// ```rust
/// use rs_htmlnav::strip_html;
///
/// assert_eq!(strip_html("<script>x</script><p>body</p>"), "body.");
/// assert_eq!(strip_html("&amp;&quot;"), "&\"");
/// ```
#[must_use]
pub fn strip_html(html: &str) -> String {
    strip_html_with_options(html, &StripOptions::default())
}

/// Extracts the canonical URL from HTML bytes with charset detection.
///
/// # Example
///
/// ```rust
/// use rs_htmlnav::canonical_url_from_bytes;
///
/// let html = b"<link rel=\"canonical\" href=\"/a\">";
/// assert_eq!(
///     canonical_url_from_bytes(html, Some("https://example.com/b")).as_deref(),
///     Some("https://example.com/a")
/// );
/// ```
#[must_use]
pub fn canonical_url_from_bytes(html: &[u8], base_url: Option<&str>) -> Option<String> {
    canonical_url_from_tree(&HtmlDocument::parse_bytes(html), base_url)
}

/// Extracts the meta refresh URL from HTML bytes with charset detection.
#[must_use]
pub fn meta_refresh_url_from_bytes(html: &[u8], base_url: Option<&str>) -> Option<String> {
    meta_refresh_url_from_tree(&HtmlDocument::parse_bytes(html), base_url)
}
