//! # Marker Detection
//!
//! The single detection rule shared by the static partitioner and the live
//! decoration builder: the first `//` on a line opens a comment that runs to
//! the end of that line.
//!
//! Both pipelines call into this module so that a line renders with the same
//! boundaries in reading view and in the editor.
//!
//! ## Hide length
//!
//! The marker token collapses when rendered. If exactly one space follows the
//! marker, that space is collapsed with it:
//!
//! ```
//! use slash_comment_engine::marker::detect;
//!
//! let m = detect("x// y").unwrap();
//! assert_eq!((m.offset, m.hide_len), (1, 3));
//! assert_eq!(m.body("x// y"), "y");
//! ```

use serde::Serialize;

use crate::buffer::Span;

/// The comment marker literal.
pub const MARKER: &str = "//";

/// Width of the marker token in bytes.
pub const MARKER_LEN: usize = MARKER.len();

/// A marker found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte offset of the marker within the line.
    pub offset: usize,
    /// Bytes collapsed at `offset`: 2, or 3 when a space follows the marker.
    pub hide_len: usize,
}

impl MarkerMatch {
    /// End of the hidden region, i.e. where the comment body starts.
    pub fn body_start(&self) -> usize {
        self.offset + self.hide_len
    }

    /// The hidden marker token (`//` or `// `).
    pub fn hidden<'a>(&self, text: &'a str) -> &'a str {
        &text[self.offset..self.body_start().min(text.len())]
    }

    /// The comment body after the hidden token. Empty when the marker ends the line.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.body_start()..).unwrap_or("")
    }
}

/// Returns the byte offset of the first marker in `text`.
pub fn find_marker(text: &str) -> Option<usize> {
    text.find(MARKER)
}

/// Number of bytes to collapse for a marker at `offset`.
///
/// Never reaches past the end of `text`.
pub fn hide_len(text: &str, offset: usize) -> usize {
    let after = offset + MARKER_LEN;
    if text.as_bytes().get(after) == Some(&b' ') {
        MARKER_LEN + 1
    } else {
        MARKER_LEN.min(text.len().saturating_sub(offset))
    }
}

/// Finds the first marker in `text` and its hide length.
pub fn detect(text: &str) -> Option<MarkerMatch> {
    let offset = find_marker(text)?;
    Some(MarkerMatch {
        offset,
        hide_len: hide_len(text, offset),
    })
}

/// How a region of a line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    /// Ordinary content before the marker.
    Normal,
    /// The collapsed marker token.
    HiddenMarker,
    /// Comment text from the end of the marker to the end of the line.
    CommentBody,
}

/// A classified region of a line, with a line-local span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub span: Span,
}

/// Partitions one line into Normal, HiddenMarker and CommentBody segments.
///
/// Empty segments are omitted, so a line without a marker yields a single
/// Normal segment (or nothing when the line is empty).
pub fn partition_line(text: &str) -> Vec<Segment> {
    let mut out = Vec::with_capacity(3);
    let Some(m) = detect(text) else {
        if !text.is_empty() {
            out.push(Segment {
                kind: SegmentKind::Normal,
                span: Span::new(0, text.len()),
            });
        }
        return out;
    };

    let segments = [
        (SegmentKind::Normal, 0, m.offset),
        (SegmentKind::HiddenMarker, m.offset, m.body_start()),
        (SegmentKind::CommentBody, m.body_start(), text.len()),
    ];
    for (kind, start, end) in segments {
        if end > start {
            out.push(Segment {
                kind,
                span: Span::new(start, end),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("x//y", Some((1, 2)))]
    #[case("x// y", Some((1, 3)))]
    #[case("x//  y", Some((1, 2)))]
    #[case("//", Some((0, 2)))]
    #[case("// ", Some((0, 3)))]
    #[case("a // b // c", Some((2, 3)))]
    #[case("a / b", None)]
    #[case("", None)]
    #[case("///x", Some((0, 2)))]
    #[case("x//\ty", Some((1, 2)))]
    fn detect_marker(#[case] text: &str, #[case] expected: Option<(usize, usize)>) {
        let found = detect(text).map(|m| (m.offset, m.hide_len));
        assert_eq!(found, expected);
    }

    #[test]
    fn first_match_only() {
        let text = "a // b // c";
        let m = detect(text).unwrap();
        assert_eq!(m.body(text), "b // c");
        assert_eq!(m.hidden(text), "// ");
    }

    #[test]
    fn body_is_empty_when_marker_ends_line() {
        let m = detect("note //").unwrap();
        assert_eq!(m.body("note //"), "");
        assert_eq!(m.hidden("note //"), "//");

        let m = detect("note // ").unwrap();
        assert_eq!(m.body("note // "), "");
        assert_eq!(m.hidden("note // "), "// ");
    }

    #[test]
    fn hide_len_stays_in_bounds() {
        assert_eq!(hide_len("/", 0), 1);
        assert_eq!(hide_len("", 0), 0);
    }

    #[test]
    fn multibyte_text_before_marker() {
        let text = "héllo //wörld";
        let m = detect(text).unwrap();
        assert_eq!(m.offset, 7);
        assert_eq!(m.body(text), "wörld");
    }

    #[test]
    fn partition_without_marker() {
        assert_eq!(
            partition_line("plain"),
            vec![Segment {
                kind: SegmentKind::Normal,
                span: Span::new(0, 5)
            }]
        );
        assert!(partition_line("").is_empty());
    }

    #[test]
    fn partition_with_marker() {
        let kinds: Vec<_> = partition_line("hello //secret")
            .into_iter()
            .map(|s| (s.kind, s.span.start, s.span.end))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (SegmentKind::Normal, 0, 6),
                (SegmentKind::HiddenMarker, 6, 8),
                (SegmentKind::CommentBody, 8, 14),
            ]
        );
    }

    #[test]
    fn partition_marker_at_line_start_and_end() {
        let kinds: Vec<_> = partition_line("// ")
            .into_iter()
            .map(|s| s.kind)
            .collect();
        assert_eq!(kinds, vec![SegmentKind::HiddenMarker]);
    }
}
