use crate::parsing::balance::Delimiter;

/// Inline code span type with owned delimiter constant.
///
/// Code spans are raw zones: their interior is never inline-parsed, and
/// nested braces are balanced so `{ a {b} c }` is one span.
pub struct InlineCode;

impl InlineCode {
    pub const DELIM: Delimiter = Delimiter::Bracket {
        open: '{',
        close: '}',
    };
}
