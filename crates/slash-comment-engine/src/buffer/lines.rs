use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Zero-based line number.
    pub number: usize,
    /// Byte span of the line content. Excludes the line terminator.
    pub span: Span,
    /// The line text without its terminator.
    pub text: String,
}

impl LineRef {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// An immutable, line-addressable snapshot of a document.
///
/// The rope is the source of truth. Line starts are indexed once on
/// construction so that `line_at` is a binary search.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    line_starts: Vec<usize>,
}

impl TextBuffer {
    pub fn from_rope(rope: Rope) -> Self {
        let line_starts = index_line_starts(&rope);
        Self { rope, line_starts }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total length in bytes.
    pub fn len(&self) -> usize {
        self.rope.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len() == 0
    }

    /// Number of lines. A trailing newline opens one final empty line, and an
    /// empty buffer still has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns line `number`, or `None` past the last line.
    pub fn line(&self, number: usize) -> Option<LineRef> {
        let start = *self.line_starts.get(number)?;
        let mut end = match self.line_starts.get(number + 1) {
            Some(next) => next - 1,
            None => self.rope.len(),
        };
        let mut text = self.rope.slice_to_cow(start..end).into_owned();
        if text.ends_with('\r') {
            text.pop();
            end -= 1;
        }
        Some(LineRef {
            number,
            span: Span { start, end },
            text,
        })
    }

    /// Returns the line containing byte offset `pos`.
    ///
    /// Offsets past the end clamp to the buffer length, so `pos == len()`
    /// yields the final line (which is empty when the text ends in `\n`).
    /// An offset sitting on a line terminator belongs to the line it ends.
    pub fn line_at(&self, pos: usize) -> LineRef {
        let pos = pos.min(self.rope.len());
        let number = self
            .line_starts
            .partition_point(|&start| start <= pos)
            .saturating_sub(1);
        self.line(number)
            .unwrap_or_else(|| unreachable!("line index always contains line 0"))
    }

    /// Iterates every line in order.
    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        (0..self.line_count()).filter_map(|n| self.line(n))
    }

    /// Span covering the whole buffer.
    pub fn full_span(&self) -> Span {
        Span {
            start: 0,
            end: self.rope.len(),
        }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::from_rope(Rope::from(text))
    }
}

impl From<Rope> for TextBuffer {
    fn from(rope: Rope) -> Self {
        Self::from_rope(rope)
    }
}

/// Collects the start offset of every line.
///
/// Uses `lines_raw` to keep newline characters so each start is exact.
fn index_line_starts(rope: &Rope) -> Vec<usize> {
    let mut starts = vec![0];
    let mut offset = 0usize;
    for line in rope.lines_raw(..) {
        offset += line.len();
        if line.ends_with('\n') {
            starts.push(offset);
        }
    }
    starts
}
