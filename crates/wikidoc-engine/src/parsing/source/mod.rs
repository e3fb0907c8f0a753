//! Source text handling: normalization, line splitting and byte spans.

pub mod lines;
pub mod span;

use std::borrow::Cow;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;

/// Normalizes line endings so every line terminal sees a `\n`.
///
/// `\r\n` becomes `\n`, and a final `\n` is appended to non-empty input that
/// lacks one. Input that is already normalized is borrowed unchanged. Byte
/// offsets reported by the parser refer to the normalized text.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let needs_newline = !text.is_empty() && !text.ends_with('\n');
    if !text.contains("\r\n") && !needs_newline {
        return Cow::Borrowed(text);
    }

    let mut out = text.replace("\r\n", "\n");
    if needs_newline && !out.ends_with('\n') {
        out.push('\n');
    }
    Cow::Owned(out)
}

/// Returns the 1-based line number holding byte `offset` of `src`.
pub fn line_number(src: &str, offset: usize) -> usize {
    let end = offset.min(src.len());
    src.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
