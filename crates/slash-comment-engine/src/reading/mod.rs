//! # Reading Mode Partitioner
//!
//! Restructures a finished content tree so that every `//` comment sits in a
//! comment container:
//!
//! ```text
//! <p>keep <span class="cm-slash-comment-container">
//!            <span class="cm-slash-hide">// </span>
//!            <span class="cm-slash-comment">note</span>
//!            ...inline siblings up to the next <br>
//!         </span><br>next line</p>
//! ```
//!
//! ## Rules
//!
//! - Only the first marker of each line counts; later `//` stay in the body.
//! - Inline siblings after a marker belong to the same visual line and move
//!   into the container, in order, up to (not including) a hard line break.
//! - A text node spanning several rendered lines (soft breaks keep `\n` in the
//!   text) ends the comment at the newline. The remainder is kept verbatim as
//!   ordinary text after the container, and no siblings are absorbed.
//! - Elements are flagged as processed, so running the partitioner again over
//!   the same tree changes nothing.

use crate::{
    marker,
    style::StyleClass,
    tree::{Element, Node, Tag},
};

/// Partitions the comments of one block in place.
///
/// Idempotent: an element already flagged as processed is left untouched.
/// Element children are processed recursively so that markers nested in
/// inline markup (emphasis, links) are found too.
pub fn process_block(el: &mut Element) {
    if el.processed {
        return;
    }

    // Snapshot the children; the live list is rebuilt from it.
    let snapshot = std::mem::take(&mut el.children);
    let mut rebuilt = Vec::with_capacity(snapshot.len() + 2);
    let mut pending = snapshot.into_iter().peekable();
    let mut comments = 0usize;

    while let Some(node) = pending.next() {
        match node {
            Node::Text(text) => {
                let (found, open) = split_text(text, &mut rebuilt);
                comments += found;
                if let Some(mut container) = open {
                    while let Some(sibling) = pending.next_if(|n| !n.is_line_break()) {
                        container.children.push(sibling);
                    }
                    rebuilt.push(Node::Element(container));
                }
            }
            Node::Element(mut child) => {
                process_block(&mut child);
                rebuilt.push(Node::Element(child));
            }
            Node::LineBreak => rebuilt.push(Node::LineBreak),
        }
    }

    el.children = rebuilt;
    el.processed = true;

    if comments > 0 {
        log::trace!("partitioned {comments} comment(s) in <{}>", el.tag.name());
    }
}

/// Runs [`process_block`] on every eligible element below `root`.
///
/// The root itself is the region handed over by the host and is not scanned
/// as a block. Descendants are visited top-down, including ones that were
/// just moved into a comment container.
pub fn update_reading_mode(root: &mut Node) {
    let Node::Element(root) = root else {
        return;
    };
    let mut visited = 0usize;
    for child in &mut root.children {
        visit(child, &mut visited);
    }
    log::debug!("reading mode: visited {visited} eligible block(s)");
}

fn visit(node: &mut Node, visited: &mut usize) {
    let Node::Element(el) = node else {
        return;
    };
    if el.tag.is_eligible() {
        *visited += 1;
        process_block(el);
    }
    for child in &mut el.children {
        visit(child, visited);
    }
}

/// Splits one text node at its first marker, pushing finished nodes to `out`.
///
/// Returns the number of comments found (0 or 1) and, when the comment runs to
/// the end of the text, its container so the caller can absorb siblings.
fn split_text(text: String, out: &mut Vec<Node>) -> (usize, Option<Element>) {
    let Some(m) = marker::detect(&text) else {
        if !text.is_empty() {
            out.push(Node::Text(text));
        }
        return (0, None);
    };

    let before = &text[..m.offset];
    if !before.is_empty() {
        out.push(Node::text(before));
    }

    let comment = &text[m.offset..];
    match comment.find('\n') {
        Some(newline) => {
            out.push(Node::Element(comment_container(&comment[..newline], m)));
            // The rest of the node is kept verbatim and nothing is absorbed.
            out.push(Node::text(&comment[newline..]));
            (1, None)
        }
        None => (1, Some(comment_container(comment, m))),
    }
}

/// Builds a container for `comment`, which starts at the marker and holds
/// no newline.
fn comment_container(comment: &str, m: marker::MarkerMatch) -> Element {
    let hide = m.hide_len.min(comment.len());

    let mut hidden = Element::new(Tag::Span).with_style(StyleClass::Hidden);
    hidden.push_text(&comment[..hide]);
    hidden.processed = true;

    let mut body = Element::new(Tag::Span).with_style(StyleClass::Comment);
    if hide < comment.len() {
        body.push_text(&comment[hide..]);
    }
    body.processed = true;

    let mut container = Element::new(Tag::Span)
        .with_style(StyleClass::Container)
        .with_child(hidden)
        .with_child(body);
    container.processed = true;
    container
}
