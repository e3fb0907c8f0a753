use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::source::{LineRef, Span};

/// What a header line carries: its level and the span of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSig {
    /// Number of leading `=` characters.
    pub level: usize,
    /// Header text, newline excluded.
    pub content: Span,
}

/// Header block type with owned marker and line pattern.
///
/// `=== Title` is a level-3 header. At least one space or tab must follow
/// the `=` run, otherwise the line is ordinary paragraph text.
pub struct Header;

impl Header {
    pub const MARKER: char = '=';

    fn pattern() -> &'static Regex {
        static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADER_REGEX
            .get_or_init(|| Regex::new(r"^(=+)[\t ]+([^\n]*)\n$").expect("Invalid header regex"))
    }

    pub fn sig(lr: &LineRef<'_>) -> Option<HeaderSig> {
        let caps = Self::pattern().captures(lr.text)?;
        let marker = caps.get(1)?;
        let text = caps.get(2)?;
        Some(HeaderSig {
            level: marker.len(),
            content: Span::new(lr.span.start + text.start(), lr.span.start + text.end()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(text: &str) -> LineRef<'_> {
        LineRef {
            span: Span::new(10, 10 + text.len()),
            text,
        }
    }

    #[rstest]
    #[case("= Title\n", 1)]
    #[case("=== Title\n", 3)]
    #[case("==\t\tTabbed\n", 2)]
    fn header_levels(#[case] text: &str, #[case] level: usize) {
        assert_eq!(Header::sig(&line(text)).map(|s| s.level), Some(level));
    }

    #[test]
    fn content_span_excludes_marker_and_newline() {
        let sig = Header::sig(&line("=== Title here\n")).unwrap();
        assert_eq!(sig.content, Span::new(14, 24));
    }

    #[test]
    fn whitespace_after_marker_is_required() {
        assert_eq!(Header::sig(&line("==Title\n")), None);
        assert_eq!(Header::sig(&line("==\n")), None);
        assert_eq!(Header::sig(&line(" = Title\n")), None);
    }

    #[test]
    fn empty_header_text_is_allowed() {
        let sig = Header::sig(&line("= \n")).unwrap();
        assert_eq!(sig.level, 1);
        assert!(sig.content.is_empty());
    }
}
