use crate::parsing::balance::{Delimiter, SpanIndex};

/// Keyword substitution span, `%%name%%`.
pub struct Keyword;

impl Keyword {
    pub const DELIM: Delimiter = Delimiter::Tag("%%");

    /// Returns the span opening at byte `at` and the keyword name. Empty names
    /// are rejected.
    pub fn extract<'a>(index: &SpanIndex<'a>, at: usize) -> Option<(&'a str, &'a str)> {
        let span = index.span(Self::DELIM, at)?;
        let name = Self::DELIM.interior(span);
        if name.is_empty() {
            return None;
        }
        Some((span, name))
    }
}
