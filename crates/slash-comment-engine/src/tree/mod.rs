//! # Content Tree
//!
//! The rendered form of a document consumed by the static partitioner.
//!
//! Nodes are an explicit tagged variant instead of a runtime-probed DOM:
//! text, elements with children, and hard line breaks. Elements carry a
//! `processed` flag so that partitioning the same tree twice is a no-op.

mod tag;

pub use tag::Tag;

use crate::style::StyleClass;

/// A node in the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element(Element),
    /// A hard line break (`<br>`).
    LineBreak,
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// True for a hard line break, whether modelled as [`Node::LineBreak`]
    /// or as a `br` element.
    pub fn is_line_break(&self) -> bool {
        match self {
            Node::LineBreak => true,
            Node::Element(el) => el.tag.is_line_break(),
            Node::Text(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this subtree. Line breaks read as `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::LineBreak => out.push('\n'),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub classes: Vec<String>,
    /// Attributes other than `class`, in insertion order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Set once the partitioner has scanned this element.
    pub processed: bool,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            processed: false,
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_style(self, class: StyleClass) -> Self {
        self.with_class(class.class_name())
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn has_style(&self, class: StyleClass) -> bool {
        self.has_class(class.class_name())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a child, merging with a trailing text node when both are text.
    pub fn push_text(&mut self, s: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(s);
        } else {
            self.children.push(Node::text(s));
        }
    }

    /// Counts elements in this subtree (including `self`) matching `pred`.
    pub fn count_elements(&self, pred: &impl Fn(&Element) -> bool) -> usize {
        let own = usize::from(pred(self));
        own + self
            .children
            .iter()
            .filter_map(Node::as_element)
            .map(|el| el.count_elements(pred))
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br_element_counts_as_line_break() {
        assert!(Node::LineBreak.is_line_break());
        assert!(Node::from(Element::new(Tag::Br)).is_line_break());
        assert!(!Node::text("br").is_line_break());
        assert!(!Node::from(Element::new(Tag::Span)).is_line_break());
    }

    #[test]
    fn text_content_flattens_subtree() {
        let p = Element::new(Tag::P)
            .with_child(Node::text("a "))
            .with_child(Element::new(Tag::Em).with_child(Node::text("b")))
            .with_child(Node::LineBreak)
            .with_child(Node::text("c"));
        assert_eq!(Node::from(p).text_content(), "a b\nc");
    }

    #[test]
    fn push_text_merges_adjacent_text() {
        let mut p = Element::new(Tag::P);
        p.push_text("a");
        p.push_text("b");
        p.children.push(Node::LineBreak);
        p.push_text("c");
        assert_eq!(
            p.children,
            vec![Node::text("ab"), Node::LineBreak, Node::text("c")]
        );
    }

    #[test]
    fn count_elements_includes_self() {
        let div = Element::new(Tag::Div)
            .with_child(Element::new(Tag::P))
            .with_child(Element::new(Tag::P).with_child(Element::new(Tag::Em)));
        assert_eq!(div.count_elements(&|el| el.tag == Tag::P), 2);
        assert_eq!(div.count_elements(&|_| true), 4);
    }
}
