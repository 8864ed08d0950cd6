use crate::{
    style::StyleClass,
    tree::{Element, Node},
};

/// Renders a tree as an indented outline for snapshot assertions.
///
/// One node per line: elements as `tag.class` (comment classes shortened to
/// `container`, `comment`, `hidden`) plus non-class attributes, text as a
/// quoted debug string, line breaks as `<br>`. Processed eligible blocks
/// carry a trailing `*`.
pub fn outline(node: &Node) -> String {
    let mut lines = Vec::new();
    write(node, 0, &mut lines);
    lines.join("\n")
}

fn write(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => lines.push(format!("{indent}{text:?}")),
        Node::LineBreak => lines.push(format!("{indent}<br>")),
        Node::Element(el) => {
            lines.push(format!("{indent}{}", head(el)));
            for child in &el.children {
                write(child, depth + 1, lines);
            }
        }
    }
}

fn head(el: &Element) -> String {
    let mut s = el.tag.name().to_string();
    for class in &el.classes {
        s.push('.');
        s.push_str(short_class(class));
    }
    for (key, value) in &el.attrs {
        s.push_str(&format!("[{key}={value}]"));
    }
    if el.processed && el.tag.is_eligible() {
        s.push('*');
    }
    s
}

fn short_class(class: &str) -> &str {
    match StyleClass::from_class_name(class) {
        Some(StyleClass::Container) => "container",
        Some(StyleClass::Comment) => "comment",
        Some(StyleClass::Hidden) => "hidden",
        None => class,
    }
}
