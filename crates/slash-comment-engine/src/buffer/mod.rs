//! Line-addressable text over an `xi_rope::Rope`.
//!
//! The live pipeline reads the document exclusively through [`TextBuffer`]:
//! it never stores lines itself and never mutates the rope.

pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, TextBuffer};
pub use slice::slice_to_string;
pub use span::Span;
