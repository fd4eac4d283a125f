//! The extractors and the stripper only rely on the `DocumentTree`
//! capability, so a non-HTML tree works as well.

use std::cell::RefCell;

use rs_htmlnav::{
    canonical_url_from_tree, meta_refresh_url_from_tree, strip_tree, DocumentTree, NodeVisitor,
    StripOptions,
};

struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, &'static str)>,
    text: &'static str,
}

/// Flat list of sibling elements.
struct FlatTree {
    elements: Vec<Element>,
    removed: RefCell<Vec<usize>>,
}

impl FlatTree {
    fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            removed: RefCell::new(Vec::new()),
        }
    }

    fn live(&self) -> impl Iterator<Item = (usize, &Element)> {
        let removed = self.removed.borrow().clone();
        self.elements
            .iter()
            .enumerate()
            .filter(move |(i, _)| !removed.contains(i))
    }
}

impl DocumentTree for FlatTree {
    type Element<'a> = usize;

    fn elements_by_tag(&self, tag: &str) -> Vec<usize> {
        self.live().filter(|(_, e)| e.tag == tag).map(|(i, _)| i).collect()
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.elements[*element]
            .attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| (*v).to_string())
    }

    fn text_of(&self, element: &usize) -> String {
        self.elements[*element].text.to_string()
    }

    fn remove_subtree(&self, element: &usize) {
        self.removed.borrow_mut().push(*element);
    }

    fn walk<V: NodeVisitor>(&self, visitor: &mut V) {
        for (_, element) in self.live() {
            visitor.enter_element(element.tag);
            visitor.text(element.text);
            visitor.leave_element(element.tag);
        }
    }
}

fn sample() -> FlatTree {
    FlatTree::new(vec![
        Element {
            tag: "title",
            attrs: vec![],
            text: "Sample",
        },
        Element {
            tag: "link",
            attrs: vec![("rel", "canonical"), ("href", "story/")],
            text: "",
        },
        Element {
            tag: "meta",
            attrs: vec![("http-equiv", "Refresh"), ("content", "2;url=\"/elsewhere\"")],
            text: "",
        },
        Element {
            tag: "script",
            attrs: vec![],
            text: "alert(1)",
        },
        Element {
            tag: "p",
            attrs: vec![],
            text: "Body text",
        },
        Element {
            tag: "span",
            attrs: vec![],
            text: " and more",
        },
    ])
}

#[test]
fn canonical_from_custom_tree() {
    assert_eq!(
        canonical_url_from_tree(&sample(), Some("http://example.com/news/")).as_deref(),
        Some("http://example.com/news/story/")
    );
    assert_eq!(canonical_url_from_tree(&sample(), None), None);
}

#[test]
fn refresh_from_custom_tree() {
    assert_eq!(
        meta_refresh_url_from_tree(&sample(), Some("http://example.com/news/")).as_deref(),
        Some("http://example.com/elsewhere")
    );
}

#[test]
fn strip_custom_tree() {
    let tree = sample();
    assert_eq!(strip_tree(&tree, &StripOptions::default()), "Body text. and more");
    assert!(tree.elements_by_tag("script").is_empty());
    assert!(tree.elements_by_tag("title").is_empty());
}

#[test]
fn strip_custom_tree_with_title() {
    assert_eq!(
        strip_tree(&sample(), &StripOptions::with_title()),
        "Sample. Body text. and more"
    );
}
