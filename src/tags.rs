//! Tag catalogs driving the text stripper.
//!
//! Arrays for iteration plus `HashSet`s for O(1) lookup, keyed by the
//! lowercase tag names the HTML parser produces.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Elements whose whole subtree is dropped before text collection.
///
/// `noscript` and `template` hold raw markup rather than document text.
pub static REMOVED_TAGS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Element dropped unless the caller asks for the title.
pub const TITLE_TAG: &str = "title";

/// Block-level elements that close a sentence and never run into
/// neighbouring blocks.
pub static BLOCK_LEVEL_TAGS: [&str; 34] = [
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "p",
    "div",
    "address",
    "article",
    "aside",
    "blockquote",
    "caption",
    "center",
    "dd",
    "dir",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "form",
    "header",
    "li",
    "main",
    "menu",
    "nav",
    "ol",
    "pre",
    "section",
    "td",
    "th",
    "tr",
    "ul",
];

/// Elements that only separate words: br, hr.
pub static LINE_BREAK_TAGS: [&str; 2] = ["br", "hr"];

/// Characters that already end a sentence.
pub static SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

// === Tag Sets (HashSets for O(1) lookup) ===

/// Set form of [`BLOCK_LEVEL_TAGS`].
pub static BLOCK_LEVEL_TAGS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_LEVEL_TAGS.into_iter().collect());

/// Whether `tag` (lowercase) breaks a line without ending a sentence.
#[inline]
#[must_use]
pub fn is_line_break(tag: &str) -> bool {
    LINE_BREAK_TAGS.contains(&tag)
}

/// Whether `tag` (lowercase) starts a new sentence block.
#[inline]
#[must_use]
pub fn is_block_level(tag: &str) -> bool {
    BLOCK_LEVEL_TAGS_SET.contains(tag)
}
