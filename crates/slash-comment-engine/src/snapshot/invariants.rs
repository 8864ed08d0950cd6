use crate::{
    marker::MARKER,
    style::StyleClass,
    tree::{Element, Node},
};

/// Validates the structure of a partitioned tree.
///
/// Asserts that every comment container:
/// - starts with a hidden-marker span followed by a comment-body span
/// - hides exactly `//` or `// `
/// - holds no hard line break among its absorbed siblings
/// - has no newline in its hidden or body text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(node: &Node) {
    if let Node::Element(el) = node {
        if el.has_style(StyleClass::Container) {
            check_container(el);
        }
        for child in &el.children {
            check(child);
        }
    }
}

fn check_container(el: &Element) {
    assert!(
        el.children.len() >= 2,
        "container needs hidden and body spans: {el:?}"
    );
    let hidden = el.children[0]
        .as_element()
        .filter(|h| h.has_style(StyleClass::Hidden))
        .unwrap_or_else(|| panic!("first container child is not hidden: {el:?}"));
    let body = el.children[1]
        .as_element()
        .filter(|b| b.has_style(StyleClass::Comment))
        .unwrap_or_else(|| panic!("second container child is not a comment: {el:?}"));

    let hidden_text = Node::from(hidden.clone()).text_content();
    assert!(
        hidden_text == MARKER || hidden_text == format!("{MARKER} "),
        "unexpected hidden marker text {hidden_text:?}"
    );
    let body_text = Node::from(body.clone()).text_content();
    assert!(
        !body_text.contains('\n'),
        "comment body crosses a line: {body_text:?}"
    );
    assert!(
        !el.children.iter().any(Node::is_line_break),
        "container absorbed a hard line break: {el:?}"
    );
}
