/// A byte range `[start, end)` into the text buffer.
///
/// Lines, segments and decorations all carry spans rather than copied text,
/// so slicing the buffer with any span reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts both ends by `base`, turning a line-local span into an absolute one.
    #[must_use]
    pub fn offset_by(self, base: usize) -> Self {
        Self {
            start: self.start + base,
            end: self.end + base,
        }
    }

    /// Closed-interval intersection, so a caret sitting exactly on either
    /// end of the span still counts as touching it.
    #[must_use]
    pub fn touches(self, from: usize, to: usize) -> bool {
        to >= self.start && from <= self.end
    }
}
