use super::{lines::TextBuffer, span::Span};

/// Extracts the text for a span from the buffer as an owned String.
///
/// This allocates; prefer working with spans where possible.
pub fn slice_to_string(buf: &TextBuffer, sp: Span) -> String {
    let end = sp.end.min(buf.len());
    let start = sp.start.min(end);
    buf.rope().slice_to_cow(start..end).into_owned()
}
