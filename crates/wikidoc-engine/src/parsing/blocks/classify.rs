use crate::parsing::source::{LineRef, Span};

use super::kinds::{EmptyLine, Header, HeaderSig, ListKind, ListMarker, Paragraph, Preformat};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. A line may satisfy several
/// terminals at once (an indented line is also a list continuation); the
/// block parser decides which one applies.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Full byte span of this line, newline included.
    pub line: Span,
    /// The line text, newline included.
    pub text: &'a str,
    /// Whitespace run if the line is blank.
    pub blank: Option<&'a str>,
    /// Verbatim text if the line is indented.
    pub indented: Option<String>,
    /// If the line opens a header.
    pub header: Option<HeaderSig>,
    /// If the line is a bullet or numbered marker line.
    pub marker: Option<ListMarker>,
    plain_shape: bool,
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        self.blank.is_some()
    }

    /// A paragraph line: plain shape and not a header.
    pub fn is_plain(&self) -> bool {
        self.plain_shape && self.header.is_none()
    }

    /// A non-blank line that does not start with a list marker character,
    /// folded into the preceding list item.
    pub fn is_continuation(&self) -> bool {
        !self.is_blank() && !ListMarker::starts_with_marker_char(self.text)
    }

    /// Item text span if this line is a marker line of `kind`.
    pub fn marker_content(&self, kind: ListKind) -> Option<Span> {
        self.marker.filter(|m| m.kind == kind).map(|m| m.content)
    }

    /// Line text without its newline, if it has one.
    pub fn content(&self) -> Span {
        let text = self.text.strip_suffix('\n').unwrap_or(self.text);
        Span::new(self.line.start, self.line.start + text.len())
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct WikiLineClassifier;

impl WikiLineClassifier {
    /// Classifies a newline-terminated line into a [`LineClass`].
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        LineClass {
            line: lr.span,
            text: lr.text,
            blank: EmptyLine::whitespace(lr.text),
            indented: Preformat::indented_line(lr.text),
            header: Header::sig(lr),
            marker: ListMarker::sig(lr),
            plain_shape: Paragraph::is_plain_shape(lr.text),
        }
    }
}
