use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    style::STYLESHEET,
    tree::{Element, Node},
};

/// Serializes a node and its subtree to HTML.
///
/// Block-level elements are followed by a newline; text is written verbatim
/// apart from escaping, so `\n` inside text survives.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serializes only the children of `el`.
pub fn inner_html(el: &Element) -> String {
    let mut out = String::new();
    for child in &el.children {
        write_node(child, &mut out);
    }
    out
}

/// Wraps the children of `root` in a complete HTML document carrying the
/// comment stylesheet.
pub fn to_html_document(root: &Node, title: &str) -> String {
    let body = match root {
        Node::Element(el) => inner_html(el),
        other => to_html(other),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        STYLESHEET,
        body
    )
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::LineBreak => out.push_str("<br>"),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    let name = el.tag.name();
    out.push('<');
    out.push_str(name);
    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(&el.classes.join(" ")));
        out.push('"');
    }
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if !el.tag.is_void() {
        for child in &el.children {
            write_node(child, out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
    if el.tag.is_block() {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tag;

    #[test]
    fn escapes_text_and_attributes() {
        let a = Element::new(Tag::A)
            .with_attr("href", "x?a=1&b=\"2\"")
            .with_child(Node::text("<tag> & co"));
        assert_eq!(
            to_html(&a.into()),
            "<a href=\"x?a=1&amp;b=&quot;2&quot;\">&lt;tag&gt; &amp; co</a>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let p = Element::new(Tag::P)
            .with_child(Node::text("a"))
            .with_child(Node::LineBreak)
            .with_child(Element::new(Tag::Br))
            .with_child(Node::text("b"));
        assert_eq!(to_html(&p.into()), "<p>a<br><br>b</p>\n");
    }

    #[test]
    fn classes_are_space_joined() {
        let span = Element::new(Tag::Span).with_class("a").with_class("b");
        assert_eq!(to_html(&span.into()), "<span class=\"a b\"></span>");
    }

    #[test]
    fn document_embeds_stylesheet() {
        let root = Element::new(Tag::Div).with_child(Element::new(Tag::P).with_child(Node::text("x")));
        let doc = to_html_document(&root.into(), "t<1>");
        assert!(doc.contains("<title>t&lt;1&gt;</title>"));
        assert!(doc.contains(".cm-slash-hide"));
        assert!(doc.contains("<body>\n<p>x</p>\n</body>"));
    }
}
