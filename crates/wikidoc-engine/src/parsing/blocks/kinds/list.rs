use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::source::{LineRef, Span};

/// Which marker opens a list line.
///
/// Ordered lists are triggered by a literal `0`, whatever numbering the
/// renderer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

/// A marker line: the list kind and the span of the item text after the
/// marker and its whitespace. A bare marker has an empty span at the newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListKind,
    pub content: Span,
}

impl ListKind {
    pub const BULLET: char = '*';
    pub const NUMBER: char = '0';

    pub fn marker(self) -> char {
        match self {
            ListKind::Bullet => Self::BULLET,
            ListKind::Numbered => Self::NUMBER,
        }
    }

    fn pattern(self) -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let cell = match self {
            ListKind::Bullet => &BULLET_REGEX,
            ListKind::Numbered => &NUMBERED_REGEX,
        };
        cell.get_or_init(|| {
            let marker = regex::escape(&self.marker().to_string());
            // Bare marker first: trailing whitespace only yields empty content.
            Regex::new(&format!(r"^{marker}(?:[\t ]*\n|[\t ]+([^\n]*)\n)$"))
                .expect("Invalid list marker regex")
        })
    }
}

impl ListMarker {
    /// Matches a bullet or numbered marker line.
    pub fn sig(lr: &LineRef<'_>) -> Option<ListMarker> {
        [ListKind::Bullet, ListKind::Numbered]
            .into_iter()
            .find_map(|kind| Self::sig_for(kind, lr))
    }

    fn sig_for(kind: ListKind, lr: &LineRef<'_>) -> Option<ListMarker> {
        let caps = kind.pattern().captures(lr.text)?;
        let content = match caps.get(1) {
            Some(m) => Span::new(lr.span.start + m.start(), lr.span.start + m.end()),
            None => Span::new(lr.span.end - 1, lr.span.end - 1),
        };
        Some(ListMarker { kind, content })
    }

    /// True if `text` begins with either list marker character.
    pub fn starts_with_marker_char(text: &str) -> bool {
        text.starts_with([ListKind::BULLET, ListKind::NUMBER])
    }
}
