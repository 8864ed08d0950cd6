use crate::{
    buffer::{LineRef, Span, TextBuffer},
    marker::{self, SegmentKind},
};

use super::decoration::{DecorationSet, DecorationSetBuilder, DecorationStyle, RangeError};

/// One selection range. `from == to` is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub from: usize,
    pub to: usize,
}

impl SelectionRange {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            from: a.min(b),
            to: a.max(b),
        }
    }

    pub fn cursor(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }
}

/// Everything the range builder reads from the host view.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub buffer: TextBuffer,
    /// Materialized offset ranges of the viewport.
    pub visible_ranges: Vec<Span>,
    /// Live preview renders markup inline; off means plain source editing.
    pub live_preview: bool,
    pub selection: Vec<SelectionRange>,
}

impl ViewState {
    /// A live-preview state showing the whole buffer with the caret at the end.
    pub fn new(buffer: TextBuffer) -> Self {
        let full = buffer.full_span();
        Self {
            visible_ranges: vec![full],
            live_preview: true,
            selection: vec![SelectionRange::cursor(full.end)],
            buffer,
        }
    }

    #[must_use]
    pub fn with_visible_ranges(mut self, ranges: impl IntoIterator<Item = Span>) -> Self {
        self.visible_ranges = ranges.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_live_preview(mut self, live_preview: bool) -> Self {
        self.live_preview = live_preview;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, ranges: impl IntoIterator<Item = SelectionRange>) -> Self {
        self.selection = ranges.into_iter().collect();
        self
    }

    fn cursor_on_line(&self, line: &LineRef) -> bool {
        self.selection
            .iter()
            .any(|r| line.span.touches(r.from, r.to))
    }
}

/// Builds the decorations for every visible line that contains a marker.
///
/// In live preview, lines without the cursor get a hidden range over the
/// marker and a comment range over the rest. Otherwise the whole comment,
/// marker included, gets one comment range so it can be edited.
pub fn build_decorations(state: &ViewState) -> DecorationSet {
    let mut builder = DecorationSetBuilder::new();
    let mut visible = state.visible_ranges.clone();
    visible.sort();

    // Lines below this number were already decorated by an earlier range.
    let mut next_line = 0usize;
    let mut lines = 0usize;

    for range in visible {
        let mut line = state.buffer.line_at(range.start);
        loop {
            if line.number >= next_line {
                lines += 1;
                if let Err(err) = decorate_line(state, &line, &mut builder) {
                    log::warn!("skipping decoration on line {}: {err}", line.number);
                }
                next_line = line.number + 1;
            }
            match state.buffer.line(line.number + 1) {
                Some(next) if next.start() <= range.end => line = next,
                _ => break,
            }
        }
    }

    let set = builder.finish();
    log::trace!("decorated {lines} visible line(s): {} range(s)", set.len());
    set
}

fn decorate_line(
    state: &ViewState,
    line: &LineRef,
    builder: &mut DecorationSetBuilder,
) -> Result<(), RangeError> {
    let segments = marker::partition_line(&line.text);
    let Some(first) = segments.iter().find(|s| s.kind != SegmentKind::Normal) else {
        return Ok(());
    };

    if state.live_preview && !state.cursor_on_line(line) {
        for segment in &segments {
            let style = match segment.kind {
                SegmentKind::Normal => continue,
                SegmentKind::HiddenMarker => DecorationStyle::Hidden,
                SegmentKind::CommentBody => DecorationStyle::Comment,
            };
            let span = segment.span.offset_by(line.start());
            builder.add(span.start, span.end, style)?;
        }
    } else {
        let start = line.start() + first.span.start;
        builder.add(start, line.end(), DecorationStyle::Comment)?;
    }
    Ok(())
}

/// A host-side change notification.
#[derive(Debug, Clone)]
pub struct ViewUpdate {
    pub state: ViewState,
    pub doc_changed: bool,
    pub viewport_changed: bool,
    pub selection_set: bool,
    /// Live preview was switched on or off.
    pub mode_changed: bool,
}

impl ViewUpdate {
    /// An update carrying `state` with no change flags set.
    pub fn new(state: ViewState) -> Self {
        Self {
            state,
            doc_changed: false,
            viewport_changed: false,
            selection_set: false,
            mode_changed: false,
        }
    }

    pub fn needs_rebuild(&self) -> bool {
        self.doc_changed || self.viewport_changed || self.selection_set || self.mode_changed
    }
}

/// Holds the current decorations for one editor view.
#[derive(Debug, Clone)]
pub struct SlashCommentView {
    decorations: DecorationSet,
}

impl SlashCommentView {
    pub fn new(state: &ViewState) -> Self {
        Self {
            decorations: build_decorations(state),
        }
    }

    /// Rebuilds when the update touches the document, viewport, selection or
    /// mode. Returns whether the decorations were replaced.
    pub fn update(&mut self, update: &ViewUpdate) -> bool {
        if !update.needs_rebuild() {
            return false;
        }
        self.decorations = build_decorations(&update.state);
        true
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }
}
