//! # Live Decorations
//!
//! Incremental counterpart of [`crate::reading`]: instead of restructuring a
//! tree, it computes style ranges over a line-addressed buffer for the lines
//! currently in view.
//!
//! ## Flow
//!
//! 1. The host snapshots its view into a [`ViewState`] (buffer, visible
//!    ranges, live-preview flag, selection).
//! 2. [`build_decorations`] returns a fresh [`DecorationSet`]; the buffer is
//!    never touched.
//! 3. [`SlashCommentView`] caches the last set and only rebuilds when a
//!    [`ViewUpdate`] reports a document, viewport, selection or mode change.
//!
//! Ranges come out sorted by start offset and never overlap: lines are walked
//! in ascending order and each line emits its ranges left to right.

pub mod decoration;
pub mod view;

pub use decoration::{Decoration, DecorationSet, DecorationSetBuilder, DecorationStyle, RangeError};
pub use view::{SelectionRange, SlashCommentView, ViewState, ViewUpdate, build_decorations};
