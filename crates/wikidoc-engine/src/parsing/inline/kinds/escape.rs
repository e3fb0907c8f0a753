use crate::parsing::balance::{Delimiter, SpanIndex};

/// Literal escape, `E<...>`.
///
/// The parser only extracts the escape; the full text including `E<` and
/// `>` is handed to the renderer undecoded.
pub struct Escape;

impl Escape {
    pub const PREFIX: char = 'E';
    pub const DELIM: Delimiter = Delimiter::Bracket {
        open: '<',
        close: '>',
    };

    /// Returns the escape opening at byte `at`, `E` included.
    pub fn extract<'a>(index: &SpanIndex<'a>, at: usize) -> Option<&'a str> {
        let src = index.src();
        if !src[at..].starts_with(Self::PREFIX) {
            return None;
        }
        let body = at + Self::PREFIX.len_utf8();
        let span = index.span(Self::DELIM, body)?;
        Some(&src[at..body + span.len()])
    }
}
