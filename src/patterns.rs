//! Compiled regex patterns for URL extraction and text stripping.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Meta Refresh Patterns
// =============================================================================

/// Matches a meta refresh `content` value: optional delay digits, optional
/// `;` or `,` separator, then a case-insensitive `url=` keyword followed by
/// the (possibly quoted) URL token.
///
/// Fractional delays (`"1.5; url=..."`) are tolerated; only the integer part
/// is captured.
pub static META_REFRESH_CONTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*(?P<delay>\d+)?(?:\.\d*)?\s*[;,]?\s*url\s*=\s*(?P<url>.*)$")
        .expect("META_REFRESH_CONTENT regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
///
/// Unicode-aware, so `&nbsp;` (U+00A0) collapses like an ordinary space.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches soft hyphens and zero-width/bidi formatting characters.
pub static INVISIBLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{00AD}\u{180E}\u{200B}-\u{200F}\u{202A}-\u{202E}\u{2060}-\u{2064}\u{FEFF}]")
        .expect("INVISIBLE_CHARS regex")
});

/// Returns true for characters `INVISIBLE_CHARS` removes.
#[must_use]
pub fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FEFF}'
    )
}
