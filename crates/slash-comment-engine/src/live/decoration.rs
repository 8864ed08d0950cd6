use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::{buffer::LineRef, style::StyleClass};

/// The two styles a live decoration can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecorationStyle {
    /// Visible, de-emphasized comment text.
    Comment,
    /// Collapsed marker token.
    Hidden,
}

impl DecorationStyle {
    pub fn class(self) -> StyleClass {
        match self {
            DecorationStyle::Comment => StyleClass::Comment,
            DecorationStyle::Hidden => StyleClass::Hidden,
        }
    }
}

/// A styled byte range `[from, to)` in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub style: DecorationStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("empty or inverted range {from}..{to}")]
    Invalid { from: usize, to: usize },
    #[error("range {from}..{to} starts before the previous range {prev_from}..{prev_to}")]
    OutOfOrder {
        from: usize,
        to: usize,
        prev_from: usize,
        prev_to: usize,
    },
    #[error("range {from}..{to} overlaps the previous range ending at {prev_to}")]
    Overlap {
        from: usize,
        to: usize,
        prev_to: usize,
    },
}

/// Accumulates decorations that must arrive sorted by start offset and
/// must not overlap.
#[derive(Debug, Default)]
pub struct DecorationSetBuilder {
    ranges: Vec<Decoration>,
}

impl DecorationSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, from: usize, to: usize, style: DecorationStyle) -> Result<(), RangeError> {
        if from >= to {
            return Err(RangeError::Invalid { from, to });
        }
        if let Some(prev) = self.ranges.last() {
            if from < prev.from {
                return Err(RangeError::OutOfOrder {
                    from,
                    to,
                    prev_from: prev.from,
                    prev_to: prev.to,
                });
            }
            if from < prev.to {
                return Err(RangeError::Overlap {
                    from,
                    to,
                    prev_to: prev.to,
                });
            }
        }
        self.ranges.push(Decoration { from, to, style });
        Ok(())
    }

    pub fn finish(self) -> DecorationSet {
        DecorationSet {
            ranges: self.ranges.into(),
        }
    }
}

/// An immutable, sorted, non-overlapping set of decorations.
///
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationSet {
    ranges: Arc<[Decoration]>,
}

impl Default for DecorationSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl DecorationSet {
    pub fn empty() -> Self {
        Self {
            ranges: Arc::from(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.ranges.iter()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.ranges
    }

    /// Style of the decoration covering byte `pos`, if any.
    pub fn style_at(&self, pos: usize) -> Option<DecorationStyle> {
        let idx = self.ranges.partition_point(|d| d.to <= pos);
        self.ranges
            .get(idx)
            .filter(|d| d.from <= pos)
            .map(|d| d.style)
    }

    /// Decorations intersecting `[from, to)`.
    pub fn between(&self, from: usize, to: usize) -> &[Decoration] {
        let start = self.ranges.partition_point(|d| d.to <= from);
        let end = self.ranges.partition_point(|d| d.from < to);
        &self.ranges[start..end.max(start)]
    }

    /// Splits a line into runs of text, each tagged with the decoration style
    /// covering it. Undecorated runs carry `None`.
    pub fn paint_line<'a>(&self, line: &'a LineRef) -> Vec<(Option<DecorationStyle>, &'a str)> {
        let base = line.start();
        let mut runs = Vec::new();
        let mut cursor = 0usize;

        for d in self.between(line.start(), line.end()) {
            let from = d.from.saturating_sub(base).clamp(cursor, line.text.len());
            let to = (d.to - base).min(line.text.len());
            if from > cursor {
                runs.push((None, &line.text[cursor..from]));
            }
            if to > from {
                runs.push((Some(d.style), &line.text[from..to]));
            }
            cursor = cursor.max(to);
        }
        if cursor < line.text.len() {
            runs.push((None, &line.text[cursor..]));
        }
        runs
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
