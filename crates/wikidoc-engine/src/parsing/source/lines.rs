use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline).
    pub span: Span,
    /// The line text, newline included.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Newlines are kept on each line, so concatenating every `text` reproduces
/// the input exactly.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            span: Span { start, end: offset },
            text,
        }
    })
}
