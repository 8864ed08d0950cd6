//! # Rendering
//!
//! Host-side glue around the reading-mode partitioner:
//!
//! - **`markdown`**: Markdown → content tree via `pulldown-cmark`
//! - **`html`**: content tree → HTML text via `html-escape`
//!
//! [`render_reading_view`] runs the whole static pipeline: render, partition,
//! serialize.

pub mod html;
pub mod markdown;

pub use html::{inner_html, to_html, to_html_document};
pub use markdown::render_markdown;

use crate::{reading::update_reading_mode, tree::Node};

/// Renders Markdown and partitions its comments, returning the tree.
pub fn render_reading_tree(src: &str) -> Node {
    let mut root = render_markdown(src);
    update_reading_mode(&mut root);
    root
}

/// Renders Markdown to reading-view HTML (the root region's children).
pub fn render_reading_view(src: &str) -> String {
    match render_reading_tree(src) {
        Node::Element(root) => inner_html(&root),
        other => to_html(&other),
    }
}
