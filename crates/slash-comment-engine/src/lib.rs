//! Inline `//` comments for Markdown.
//!
//! Two pipelines share one detection rule ([`marker`]) and one set of style
//! classes ([`style`]):
//!
//! - [`reading`] restructures a rendered content tree once, wrapping each
//!   comment in a container with a hidden marker and a visible body.
//! - [`live`] computes sorted decoration ranges over a line-addressed buffer
//!   for whatever is in view, every time the view changes.

pub mod buffer;
pub mod io;
pub mod live;
pub mod marker;
pub mod reading;
pub mod render;
pub mod snapshot;
pub mod style;
pub mod tree;

// Re-export key types for easier usage
pub use buffer::{LineRef, Span, TextBuffer};
pub use live::{
    Decoration, DecorationSet, DecorationStyle, SelectionRange, SlashCommentView, ViewState,
    ViewUpdate, build_decorations,
};
pub use marker::{MARKER, MarkerMatch, detect};
pub use reading::{process_block, update_reading_mode};
pub use render::{render_markdown, render_reading_view};
pub use style::StyleClass;
pub use tree::{Element, Node, Tag};
