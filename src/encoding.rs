//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. Before parsing they are decoded using,
//! in order of precedence: a byte-order mark, a `<meta charset>` or
//! `<meta http-equiv="Content-Type">` declaration within the first 1024
//! bytes, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;

/// How far into the document a charset declaration is looked for.
const SNIFF_LIMIT: usize = 1024;

/// Matches `<meta charset=...>` and the `charset=` parameter of a
/// `<meta http-equiv="Content-Type" content="...">` declaration.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+?charset\s*=\s*["']?([a-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    declared_charset(head)
        .and_then(Encoding::for_label)
        .unwrap_or(UTF_8)
}

/// Charset label declared in a meta tag, if any.
fn declared_charset(head: &[u8]) -> Option<&[u8]> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_bytes())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_htmlnav::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
