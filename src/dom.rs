//! DOM Operations Adapter
//!
//! The extractors and the stripper only need a small slice of a DOM:
//! find elements by tag, read attributes and text, drop subtrees, and walk
//! the remaining nodes in document order. [`DocumentTree`] names that slice;
//! [`HtmlDocument`] provides it on top of the `dom_query` crate, whose
//! html5ever parser lowercases tag/attribute names, repairs unclosed tags
//! and decodes character entities.

pub use dom_query::{Document, NodeRef, Selection};

use crate::encoding;

/// Receives the nodes of a [`DocumentTree`] in document order.
pub trait NodeVisitor {
    /// Called when an element opens. `tag` is lowercase.
    fn enter_element(&mut self, tag: &str);

    /// Called for each text node, with entities already decoded.
    fn text(&mut self, text: &str);

    /// Called when the element opened by the matching `enter_element` closes.
    fn leave_element(&mut self, tag: &str);
}

/// Case-insensitive, malformed-markup-tolerant document tree.
///
/// Tag names passed to [`elements_by_tag`](Self::elements_by_tag) and
/// attribute names passed to [`attribute`](Self::attribute) are lowercase.
pub trait DocumentTree {
    /// Handle to a single element of this tree.
    type Element<'a>
    where
        Self: 'a;

    /// All elements with the given tag name, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Element<'_>>;

    /// Value of an attribute, `None` if absent.
    fn attribute(&self, element: &Self::Element<'_>, name: &str) -> Option<String>;

    /// Concatenated text of the element and its descendants.
    fn text_of(&self, element: &Self::Element<'_>) -> String;

    /// Detach the element and everything below it.
    fn remove_subtree(&self, element: &Self::Element<'_>);

    /// Feed every remaining node to `visitor`, depth first.
    fn walk<V: NodeVisitor>(&self, visitor: &mut V);
}

/// Parsed HTML document backed by `dom_query`.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parse an HTML string. Never fails: broken markup yields a repaired tree.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self { doc: parse(html) }
    }

    /// Parse raw HTML bytes, honouring the declared charset.
    #[must_use]
    pub fn parse_bytes(html: &[u8]) -> Self {
        Self::parse(&encoding::transcode_to_utf8(html))
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument").finish_non_exhaustive()
    }
}

enum Step<'a> {
    Visit(NodeRef<'a>),
    Leave(String),
}

impl DocumentTree for HtmlDocument {
    type Element<'a> = Selection<'a>;

    fn elements_by_tag(&self, tag: &str) -> Vec<Selection<'_>> {
        let found = self.doc.select(tag);
        found.nodes().iter().map(|node| Selection::from(*node)).collect()
    }

    fn attribute(&self, element: &Selection<'_>, name: &str) -> Option<String> {
        get_attribute(element, name)
    }

    fn text_of(&self, element: &Selection<'_>) -> String {
        element.text().to_string()
    }

    fn remove_subtree(&self, element: &Selection<'_>) {
        element.remove();
    }

    // Iterative so that pathologically deep markup cannot exhaust the stack.
    fn walk<V: NodeVisitor>(&self, visitor: &mut V) {
        let roots = self.doc.select("html");
        let mut stack: Vec<Step<'_>> =
            roots.nodes().iter().rev().map(|n| Step::Visit(*n)).collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Leave(tag) => visitor.leave_element(&tag),
                Step::Visit(node) => {
                    if node.is_text() {
                        visitor.text(&node.text());
                    } else if node.is_element() {
                        let tag = node
                            .node_name()
                            .map(|t| t.to_ascii_lowercase())
                            .unwrap_or_default();
                        visitor.enter_element(&tag);
                        stack.push(Step::Leave(tag));

                        let children: Vec<NodeRef<'_>> = node.children().into_iter().collect();
                        stack.extend(children.into_iter().rev().map(Step::Visit));
                    }
                }
            }
        }
    }
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
