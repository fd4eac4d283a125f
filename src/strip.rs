//! HTML to sentence-delimited plain text.
//!
//! Stages, in order:
//! 1. drop `script`/`style`/`noscript`/`template` subtrees, and `title`
//!    unless requested;
//! 2. walk the tree, closing every block-level element with a period (when
//!    its text does not already end a sentence) and padding it with blank
//!    lines so blocks never run together;
//! 3. keep text nodes only (entities are decoded by the parser);
//! 4. remove soft hyphens and other invisible formatting characters;
//! 5. collapse whitespace to single spaces and trim.

use crate::dom::{DocumentTree, HtmlDocument, NodeVisitor};
use crate::options::StripOptions;
use crate::patterns::{is_invisible, INVISIBLE_CHARS, WHITESPACE_NORMALIZE};
use crate::tags::{self, REMOVED_TAGS, SENTENCE_TERMINATORS, TITLE_TAG};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Collects text, synthesizing sentence ends at block boundaries.
struct SentenceCollector {
    out: String,
    include_title: bool,
    /// Offsets into `out` where each open block's text begins.
    open_blocks: Vec<usize>,
}

impl SentenceCollector {
    fn new(options: &StripOptions) -> Self {
        Self {
            out: String::new(),
            include_title: options.include_title,
            open_blocks: Vec::new(),
        }
    }

    fn is_sentence_block(&self, tag: &str) -> bool {
        tags::is_block_level(tag) || (self.include_title && tag == TITLE_TAG)
    }

    /// Append a period after the block's last visible character unless it
    /// already ends a sentence. Blocks with no visible text are left alone.
    fn close_sentence(&mut self, start: usize) {
        let segment = &self.out[start..];
        let Some((idx, last)) = segment
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_whitespace() && !is_invisible(*c))
        else {
            return;
        };

        if SENTENCE_TERMINATORS.contains(&last) {
            return;
        }

        self.out.truncate(start + idx + last.len_utf8());
        self.out.push('.');
    }

    fn finish(self) -> String {
        self.out
    }
}

impl NodeVisitor for SentenceCollector {
    fn enter_element(&mut self, tag: &str) {
        if tags::is_line_break(tag) {
            self.out.push('\n');
        } else if self.is_sentence_block(tag) {
            self.out.push_str(BLOCK_SEPARATOR);
            self.open_blocks.push(self.out.len());
        }
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn leave_element(&mut self, tag: &str) {
        if !self.is_sentence_block(tag) {
            return;
        }
        if let Some(start) = self.open_blocks.pop() {
            self.close_sentence(start);
        }
        self.out.push_str(BLOCK_SEPARATOR);
    }
}

/// Remove the subtrees that never contribute text.
fn remove_non_content<T: DocumentTree>(tree: &T, options: &StripOptions) {
    let title = (!options.include_title).then_some(TITLE_TAG);

    for tag in REMOVED_TAGS.iter().copied().chain(title) {
        for element in tree.elements_by_tag(tag) {
            tree.remove_subtree(&element);
        }
    }
}

/// Turn raw collected text into the final single-line form.
fn normalize_text(raw: &str) -> String {
    let visible = INVISIBLE_CHARS.replace_all(raw, "");
    // Decoded `&lt;` must not reintroduce markup-looking output
    let visible = visible.replace('<', "");
    let collapsed = WHITESPACE_NORMALIZE.replace_all(&visible, " ");
    collapsed.trim().to_string()
}

/// Strip an already parsed tree. The tree is modified: non-content
/// subtrees are removed from it.
#[must_use]
pub fn strip_tree<T: DocumentTree>(tree: &T, options: &StripOptions) -> String {
    remove_non_content(tree, options);

    let mut collector = SentenceCollector::new(options);
    tree.walk(&mut collector);

    normalize_text(&collector.finish())
}

/// Convert HTML to plain text with the given options.
#[must_use]
pub fn strip_html_with_options(html: &str, options: &StripOptions) -> String {
    let text = strip_tree(&HtmlDocument::parse(html), options);
    tracing::trace!(html_len = html.len(), text_len = text.len(), "stripped html");
    text
}

/// Convert raw HTML bytes to plain text, honouring the declared charset.
#[must_use]
pub fn strip_html_bytes(html: &[u8], options: &StripOptions) -> String {
    let text = strip_tree(&HtmlDocument::parse_bytes(html), options);
    tracing::trace!(html_len = html.len(), text_len = text.len(), "stripped html bytes");
    text
}
